use thiserror::Error;

/// Errors that can occur while polling, validating and forwarding homework statuses.
///
/// The `Display` text of every variant is operator-facing: it is embedded verbatim
/// into the failure notification sent to the chat.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("API недоступен, код ошибки {0}")]
    NonSuccessStatus(u16),

    #[error("Ошибка в запросе API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ошибка json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Ответ пришел в некорректном формате: {0}")]
    MalformedResponse(String),

    #[error("В ответе отсутствует необходимый ключ: {0}")]
    MissingField(&'static str),

    #[error("Пустой статус работы")]
    MissingStatus,

    #[error("Пустое имя работы")]
    MissingName,

    #[error("Неизвестный статус работы: {0}")]
    UnknownStatus(String),

    #[error("Сообщение не удалось отправить: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
