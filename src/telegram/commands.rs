use teloxide::utils::command::BotCommands;

pub const WELCOME_TEXT: &str = "Welcome! Send me any text or image and I'll respond using Gemini AI.\n\
You can also send an image with a caption to ask specific questions about it.\n\
I can also generate images from your text descriptions!";

pub const HELP_TEXT: &str = "Simply send me:\n\
• Any text message to chat\n\
• An image to analyze\n\
• An image with a caption to ask specific questions\n\
• Start your message with 'generate:' to create an image";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "show what the bot can do.")]
    Help,
}

impl Command {
    pub fn reply_text(&self) -> &'static str {
        match self {
            Self::Start => WELCOME_TEXT,
            Self::Help => HELP_TEXT,
        }
    }
}
