//! [`CommandNode`] implementation for `clap` command trees.
//!
//! The rules mirror the conventions of the Linkerd CLI reference: commands
//! are listed alphabetically, every command carries an implicit `help` flag,
//! and `global` arguments are reported as inherited options on descendants.
//!
//! The tree should be passed before `Command::build` runs: until then every
//! argument a command holds is its own declaration, including a `global`
//! redeclaration of an ancestor's flag. Clap's generated `help` subcommand is
//! never documented.

use clap::builder::StyledStr;
use clap::{Arg, ArgAction, Command};

use crate::error::ExtractionError;
use crate::node::CommandNode;
use crate::schema::CommandOption;

const HELP_COMMAND: &str = "help";

/// A borrowed clap command together with its position in the tree.
#[derive(Debug, Clone)]
pub struct ClapNode<'a> {
    command: &'a Command,
    path: String,
    parent: Option<ParentRef>,
    inherited: Vec<&'a Arg>,
}

#[derive(Debug, Clone)]
struct ParentRef {
    path: String,
    synopsis: String,
}

impl<'a> ClapNode<'a> {
    /// Wraps the root of a command tree.
    #[must_use]
    pub fn root(command: &'a Command) -> Self {
        Self {
            command,
            path: command.get_name().to_owned(),
            parent: None,
            inherited: Vec::new(),
        }
    }

    /// Globals visible to this command's children, nearest declaration first
    /// winning on a name clash.
    fn inherited_by_children(&self) -> Vec<&'a Arg> {
        let mut inherited = self.inherited.clone();
        for arg in self.command.get_arguments().filter(|arg| arg.is_global_set()) {
            inherited.retain(|existing| flag_name(existing) != flag_name(arg));
            inherited.push(arg);
        }
        inherited
    }
}

impl CommandNode for ClapNode<'_> {
    fn name(&self) -> String {
        self.command.get_name().to_owned()
    }

    fn command_path(&self) -> String {
        self.path.clone()
    }

    fn children(&self) -> Result<Vec<Self>, ExtractionError> {
        let inherited = self.inherited_by_children();
        let parent = ParentRef {
            path: self.path.clone(),
            synopsis: self.synopsis(),
        };
        sorted_subcommands(self.command)
            .into_iter()
            .map(|sub| {
                if sub.get_name().is_empty() {
                    return Err(ExtractionError::EmptyName {
                        parent: self.path.clone(),
                    });
                }
                Ok(Self {
                    command: sub,
                    path: format!("{} {}", self.path, sub.get_name()),
                    parent: Some(parent.clone()),
                    inherited: inherited.clone(),
                })
            })
            .collect()
    }

    fn is_available(&self) -> bool {
        is_available_command(self.command)
    }

    fn is_help_topic(&self) -> bool {
        is_help_topic_command(self.command)
    }

    fn synopsis(&self) -> String {
        plain(self.command.get_about())
    }

    fn description(&self) -> String {
        plain(self.command.get_long_about())
    }

    fn example(&self) -> String {
        plain(
            self.command
                .get_after_long_help()
                .or_else(|| self.command.get_after_help()),
        )
    }

    fn options(&self) -> Result<Vec<CommandOption>, ExtractionError> {
        let mut options: Vec<CommandOption> = self
            .command
            .get_arguments()
            .filter(|arg| is_documented_flag(arg))
            .map(option_from_arg)
            .collect();
        if !self.command.is_disable_help_flag_set()
            && !options.iter().any(|option| option.name == "help")
        {
            options.push(help_option(self.command.get_name()));
        }
        sort_unique(options, &self.path)
    }

    fn inherited_options(&self) -> Result<Vec<CommandOption>, ExtractionError> {
        let local: Vec<&str> = self
            .command
            .get_arguments()
            .filter(|arg| !arg.is_positional())
            .map(flag_name)
            .collect();
        let options = self
            .inherited
            .iter()
            .filter(|arg| !arg.is_hide_set() && !local.contains(&flag_name(arg)))
            .map(|arg| option_from_arg(arg))
            .collect();
        sort_unique(options, &self.path)
    }

    fn see_also(&self) -> Vec<String> {
        let parent = self
            .parent
            .iter()
            .map(|parent| format!("{} - {}", parent.path, parent.synopsis));
        let children = sorted_subcommands(self.command)
            .into_iter()
            .filter(|child| is_available_command(child) && !is_help_topic_command(child))
            .map(|child| {
                format!(
                    "{} {} - {}",
                    self.path,
                    child.get_name(),
                    plain(child.get_about())
                )
            });
        parent.chain(children).collect()
    }
}

/// A command runs on its own unless it only dispatches to subcommands.
fn is_runnable(command: &Command) -> bool {
    !command.is_subcommand_required_set()
}

fn is_available_command(command: &Command) -> bool {
    if command.is_hide_set() {
        return false;
    }
    is_runnable(command) || sorted_subcommands(command).into_iter().any(is_available_command)
}

fn is_help_topic_command(command: &Command) -> bool {
    !is_runnable(command)
        && !command.is_hide_set()
        && sorted_subcommands(command).into_iter().all(is_help_topic_command)
}

/// Clap generates a `help` subcommand for any command with subcommands unless
/// it is disabled.
fn is_generated_help(parent: &Command, sub: &Command) -> bool {
    sub.get_name() == HELP_COMMAND && !parent.is_disable_help_subcommand_set()
}

fn sorted_subcommands(command: &Command) -> Vec<&Command> {
    let mut subcommands: Vec<&Command> = command
        .get_subcommands()
        .filter(|sub| !is_generated_help(command, sub))
        .collect();
    subcommands.sort_by(|left, right| left.get_name().cmp(right.get_name()));
    subcommands
}

fn is_documented_flag(arg: &Arg) -> bool {
    !arg.is_positional() && !arg.is_hide_set()
}

fn flag_name(arg: &Arg) -> &str {
    arg.get_long().unwrap_or_else(|| arg.get_id().as_str())
}

fn option_from_arg(arg: &Arg) -> CommandOption {
    CommandOption {
        name: flag_name(arg).to_owned(),
        shorthand: arg.get_short().map(String::from).unwrap_or_default(),
        default_value: default_value(arg),
        usage: plain(arg.get_help()),
    }
}

fn default_value(arg: &Arg) -> String {
    let defaults = arg.get_default_values();
    if !defaults.is_empty() {
        return defaults
            .iter()
            .map(|value| value.to_string_lossy())
            .collect::<Vec<_>>()
            .join(",");
    }
    let implied = match arg.get_action() {
        ArgAction::SetTrue => "false",
        ArgAction::SetFalse => "true",
        ArgAction::Count => "0",
        _ => "",
    };
    implied.to_owned()
}

fn help_option(command_name: &str) -> CommandOption {
    CommandOption {
        name: "help".to_owned(),
        shorthand: "h".to_owned(),
        default_value: "false".to_owned(),
        usage: format!("help for {command_name}"),
    }
}

fn sort_unique(
    mut options: Vec<CommandOption>,
    command: &str,
) -> Result<Vec<CommandOption>, ExtractionError> {
    options.sort_by(|left, right| left.name.cmp(&right.name));
    let duplicate = options.windows(2).find_map(|pair| match pair {
        [left, right] if left.name == right.name => Some(left.name.clone()),
        _ => None,
    });
    if let Some(option) = duplicate {
        return Err(ExtractionError::DuplicateOption {
            command: command.to_owned(),
            option,
        });
    }
    Ok(options)
}

fn plain(text: Option<&StyledStr>) -> String {
    text.map_or_else(String::new, ToString::to_string)
}

#[cfg(test)]
mod tests;
