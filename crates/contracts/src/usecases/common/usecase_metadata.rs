/// Идентификация UseCase: индекс, имя и производные от них пути
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "remix_artifact")
    fn usecase_name() -> &'static str;

    /// Заголовок окна UseCase в UI
    fn display_name() -> &'static str;

    /// "u501_remix_artifact", используется как префикс в логах
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// "/api/u501/remix"
    fn api_path(action: &str) -> String {
        format!("/api/{}/{}", Self::usecase_index(), action)
    }
}
