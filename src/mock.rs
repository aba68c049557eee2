//! Mock data and canned responses
//!
//! Everything the product "knows" lives here: demo credentials, the seed
//! conversation history, and the canned assistant replies. No AI is
//! involved; replies are picked at random per mode.

use chrono::{Duration, Utc};

use crate::types::{ChatMode, ConversationSummary, Message, UserProfile};

/// Credentials accepted by the mock sign-in check.
pub const DEMO_EMAIL: &str = "user@agnisai.com";
pub const DEMO_PASSWORD: &str = "AgnisPro2025!";

/// The only verification code the mock check accepts.
pub const VALID_CODE: &str = "123456";

pub fn demo_user() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        is_guest: false,
    }
}

/// Canned assistant openers per mode.
fn openers(mode: ChatMode) -> [&'static str; 3] {
    match mode {
        ChatMode::Research => [
            "Based on current research and data analysis, here are the key findings...",
            "Let me break down this topic with evidence-based insights...",
            "According to recent studies and peer-reviewed sources...",
        ],
        ChatMode::Coding => [
            "Here's a solution to your programming challenge...",
            "Let me help you debug this code and optimize the approach...",
            "I'll provide you with best practices and clean code examples...",
        ],
        ChatMode::Creative => [
            "What an interesting creative challenge! Let me help you brainstorm...",
            "Here's a creative approach to your project...",
            "Let's explore some innovative ideas together...",
        ],
    }
}

/// Build a canned assistant reply for a user prompt.
pub fn assistant_reply(prompt: &str, mode: ChatMode) -> String {
    let pool = openers(mode);
    let index = (js_sys::Math::random() * pool.len() as f64) as usize;
    let opener = pool[index.min(pool.len() - 1)];

    format!(
        "{opener}\n\nI understand you're asking about: \"{prompt}\"\n\n\
         This is a fascinating topic that requires careful analysis. Let me \
         provide you with a comprehensive response that addresses your \
         specific needs and offers actionable insights."
    )
}

pub fn welcome_message(mode: ChatMode) -> Message {
    Message::assistant(
        "Hello! I'm your AI assistant. How can I help you today?",
        mode,
    )
}

/// Seed transcript shown when the chat page opens without an active chat.
pub fn seed_messages() -> Vec<Message> {
    let mut greeting = Message::assistant(
        "Hello! I'm your AI assistant. I can help you with research, coding, \
         and creative projects. What would you like to work on today?",
        ChatMode::Research,
    );
    greeting.timestamp = Utc::now() - Duration::minutes(5);

    let mut question = Message::user(
        "I'd like to analyze some climate data and understand the trends in \
         global temperature changes over the past decade.",
    );
    question.timestamp = Utc::now() - Duration::minutes(4);

    let mut answer = Message::assistant(
        "I'd be happy to help you analyze climate data and temperature trends! \
         Here's a starting point for loading the data and plotting anomalies:\n\n\
         ```python\n\
         import pandas as pd\n\
         import matplotlib.pyplot as plt\n\n\
         df = pd.read_csv('global_temperature_data.csv')\n\
         df['temp_anomaly'] = df['temperature'] - df['temperature'].mean()\n\n\
         plt.figure(figsize=(12, 6))\n\
         plt.plot(df['year'], df['temp_anomaly'])\n\
         plt.title('Global Temperature Anomalies (1880-2023)')\n\
         plt.show()\n\
         ```\n\n\
         Would you like me to help you with any specific aspect of this \
         analysis, or recommendations for reliable climate data sources?",
        ChatMode::Research,
    );
    answer.timestamp = Utc::now() - Duration::minutes(3);

    vec![greeting, question, answer]
}

/// Seed conversation summaries for the sidebar and the history browser.
pub fn conversation_summaries() -> Vec<ConversationSummary> {
    let now = Utc::now();
    let conv = |id: u32,
                title: &str,
                preview: &str,
                mode: ChatMode,
                age_days: i64,
                message_count: u32,
                is_favorite: bool,
                tags: &[&str],
                snippet: &str| ConversationSummary {
        id,
        title: title.to_string(),
        preview: preview.to_string(),
        mode,
        created_at: now - Duration::days(age_days),
        updated_at: now - Duration::hours(age_days * 12),
        message_count,
        is_favorite,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        snippet: snippet.to_string(),
    };

    vec![
        conv(
            1,
            "Python Data Analysis with Pandas",
            "Help me analyze this dataset using pandas and matplotlib. I need \
             to identify trends in sales data...",
            ChatMode::Coding,
            1,
            12,
            true,
            &["python", "data-analysis", "pandas"],
            "```python\nimport pandas as pd\ndf = pd.read_csv('sales_data.csv')\nprint(df.head())\n```",
        ),
        conv(
            2,
            "Climate Change Research Findings",
            "What are the latest findings on global warming effects on marine \
             ecosystems?",
            ChatMode::Research,
            2,
            8,
            false,
            &["climate-change", "marine-biology", "research"],
            "Recent studies show significant impacts on coral reef systems...",
        ),
        conv(
            3,
            "Sci-Fi Short Story Brainstorming",
            "I need help brainstorming ideas for a sci-fi story about time \
             travel and parallel universes...",
            ChatMode::Creative,
            3,
            15,
            true,
            &["creative-writing", "sci-fi", "storytelling"],
            "The protagonist discovers a device that allows them to glimpse \
             alternate realities...",
        ),
        conv(
            4,
            "React Component Architecture",
            "Best practices for organizing components in a large-scale \
             application...",
            ChatMode::Coding,
            4,
            6,
            false,
            &["react", "architecture", "best-practices"],
            "Consider using compound components pattern for better reusability...",
        ),
        conv(
            5,
            "Digital Marketing Strategy Analysis",
            "Analyze this marketing campaign performance data and suggest \
             improvements...",
            ChatMode::Research,
            5,
            9,
            false,
            &["marketing", "analysis", "strategy"],
            "The campaign shows strong engagement in the 25-34 age demographic...",
        ),
        conv(
            6,
            "Machine Learning Model Optimization",
            "How to optimize neural network performance for image \
             classification tasks...",
            ChatMode::Coding,
            6,
            11,
            true,
            &["machine-learning", "neural-networks", "optimization"],
            "Consider using data augmentation and transfer learning techniques...",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_have_unique_ids() {
        let summaries = conversation_summaries();
        let mut ids: Vec<_> = summaries.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), summaries.len());
    }

    #[test]
    fn summaries_are_newest_first() {
        let summaries = conversation_summaries();
        for pair in summaries.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
