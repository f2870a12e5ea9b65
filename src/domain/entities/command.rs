/// Commands the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    Start,
    Play,
    Definition,
    Help,
}

impl GameCommand {
    pub const ALL: [GameCommand; 4] = [
        GameCommand::Start,
        GameCommand::Play,
        GameCommand::Definition,
        GameCommand::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::Play => "play",
            GameCommand::Definition => "definition",
            GameCommand::Help => "help",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameCommand::Start => "Start the bot",
            GameCommand::Play => "Start today's game",
            GameCommand::Definition => "Get the definition hint",
            GameCommand::Help => "Show how to play",
        }
    }

    /// Look up a command by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(GameCommand::from_name("play"), Some(GameCommand::Play));
        assert_eq!(GameCommand::from_name("DEFINITION"), Some(GameCommand::Definition));
        assert_eq!(GameCommand::from_name("quote"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for cmd in GameCommand::ALL {
            assert_eq!(GameCommand::from_name(cmd.name()), Some(cmd));
        }
    }
}
