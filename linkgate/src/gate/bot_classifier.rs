//! Link-preview crawler detection based on the `User-Agent` header

use regex::{Regex, RegexBuilder};
use std::fmt::Display;

/// Known preview crawlers, in match priority order.
const PREVIEW_BOTS: &[(&str, &str)] = &[
    ("discordbot", "Discordbot"),
    ("twitterbot", "Twitterbot"),
    ("slackbot-linkexpanding", "Slackbot-LinkExpanding"),
    ("facebookbot", "facebookexternalhit|Facebot"),
    ("linkedinbot", "LinkedInBot"),
    ("pinterestbot", "Pinterestbot"),
    ("telegrambot", "TelegramBot"),
];

/// A named User-Agent pattern identifying one preview crawler
#[derive(Debug, Clone)]
pub struct PreviewBotRule {
    name: String,
    pattern: Regex,
}

impl PreviewBotRule {
    /// Compile a rule; the pattern is always matched case-insensitively.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { name: name.into(), pattern })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn is_match(&self, user_agent: &str) -> bool {
        self.pattern.is_match(user_agent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub is_bot: bool,
    pub bot_name: Option<String>,
    pub user_agent: String,
}

impl Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.bot_name {
            Some(name) => write!(f, "bot={} user_agent={:?}", name, self.user_agent),
            None => write!(f, "not a bot, user_agent={:?}", self.user_agent),
        }
    }
}

/// Ordered, immutable set of preview bot rules.
///
/// Built once at startup and shared by reference. When a User-Agent matches more
/// than one rule, the rule declared first wins.
#[derive(Debug, Clone)]
pub struct BotClassifier {
    rules: Vec<PreviewBotRule>,
}

impl BotClassifier {
    pub fn new(rules: Vec<PreviewBotRule>) -> Self {
        Self { rules }
    }

    /// Compile the built-in preview crawler table.
    pub fn preview_bots() -> Result<Self, regex::Error> {
        let rules = PREVIEW_BOTS.iter().map(|(name, pattern)| PreviewBotRule::new(*name, pattern)).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn get_rules(&self) -> &[PreviewBotRule] {
        &self.rules
    }

    /// Classify a raw User-Agent value. An empty string is never a bot.
    pub fn classify(&self, user_agent: &str) -> ClassificationResult {
        let matched = self.rules.iter().find(|rule| rule.is_match(user_agent));
        ClassificationResult {
            is_bot: matched.is_some(),
            bot_name: matched.map(|rule| rule.name.clone()),
            user_agent: user_agent.to_string(),
        }
    }
}
