//! Commands a keybinding can trigger

use std::str::FromStr;

use crate::messages::PanelMsg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Close (destroy) the frontmost panel if it is closable
    CloseFrontmost,
    /// Hide the frontmost panel if it is closable
    HideFrontmost,
    /// Destroy every panel
    CloseAll,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    pub fn to_msgs(self) -> Vec<PanelMsg> {
        match self {
            Command::CloseFrontmost => vec![PanelMsg::CancelFrontmost],
            Command::HideFrontmost => vec![PanelMsg::HideFrontmost],
            Command::CloseAll => vec![PanelMsg::CloseAll],
            Command::Unbound => vec![],
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CloseFrontmost" => Ok(Command::CloseFrontmost),
            "HideFrontmost" => Ok(Command::HideFrontmost),
            "CloseAll" => Ok(Command::CloseAll),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_msgs() {
        assert!(matches!(
            Command::CloseFrontmost.to_msgs()[..],
            [PanelMsg::CancelFrontmost]
        ));
        assert!(Command::Unbound.to_msgs().is_empty());
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("CloseAll".parse::<Command>(), Ok(Command::CloseAll));
        assert!("Quit".parse::<Command>().is_err());
    }
}
