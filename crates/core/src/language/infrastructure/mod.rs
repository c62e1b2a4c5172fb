pub mod language_tool_checker;
pub mod vader_sentiment_scorer;
