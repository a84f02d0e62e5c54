//! Переписывание HTML артефакта перед показом в iframe.
//!
//! Артефакт рендерится через `srcdoc`, поэтому относительные ссылки на ассеты
//! должны разрешаться относительно каталога статических артефактов.

/// Каталог статических артефактов относительно страницы
pub const BASE_PATH: &str = "init/";

/// Декларация base path, вставляемая в `<head>`
pub const BASE_TAG: &str = r#"<base href="./init/">"#;

/// Разметка, показываемая вместо артефакта при ошибке загрузки
pub const ERROR_PLACEHOLDER: &str = r#"<div style="color:white;display:flex;height:100%;justify-content:center;align-items:center;font-family:sans-serif;">ARTIFACT CORRUPTED</div>"#;

/// Byte offset right after the opening `<head ...>` tag, if there is one.
///
/// `<header>` and other tags that merely start with `head` are skipped.
fn head_open_end(html: &str) -> Option<usize> {
    // to_ascii_lowercase keeps byte offsets intact
    let lower = html.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut from = 0;

    while let Some(pos) = lower[from..].find("<head") {
        let after = from + pos + "<head".len();
        match bytes.get(after) {
            Some(b'>') => return Some(after + 1),
            Some(c) if c.is_ascii_whitespace() || *c == b'/' => {
                return lower[after..].find('>').map(|end| after + end + 1);
            }
            _ => from = after,
        }
    }

    None
}

/// Вставить [`BASE_TAG`] сразу после открывающего `<head>` или в начало документа.
///
/// Документ, уже содержащий ровно эту декларацию, возвращается без изменений,
/// поэтому в результате она всегда встречается один раз.
pub fn inject_base_tag(html: &str) -> String {
    if html.contains(BASE_TAG) {
        return html.to_string();
    }

    match head_open_end(html) {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + BASE_TAG.len());
            out.push_str(&html[..at]);
            out.push_str(BASE_TAG);
            out.push_str(&html[at..]);
            out
        }
        None => format!("{}{}", BASE_TAG, html),
    }
}

/// Base path для ответа модели: вставляется только если ответ ещё не ссылается
/// ни на `<base`, ни на каталог артефактов.
pub fn ensure_remix_base_tag(html: &str) -> String {
    let already_based =
        html.to_ascii_lowercase().contains("<base") || html.contains(BASE_PATH);
    if already_based {
        html.to_string()
    } else {
        inject_base_tag(html)
    }
}

/// Снять обёртку markdown code fence (```` ```html ... ``` ````) с ответа модели.
///
/// Тег языка `html` снимается и тогда, когда разметка идёт сразу за ним.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();

    let body = match trimmed.strip_prefix("```") {
        Some(rest) => strip_lang_tag(rest),
        None => trimmed,
    };

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim().to_string()
}

/// Тег языка сразу после открывающего fence: `html` в любом регистре снимается
/// всегда, прочие (`xml`, `javascript`) только если за ними пробельный символ.
fn strip_lang_tag(rest: &str) -> &str {
    if let Some(tag) = rest.get(..4) {
        if tag.eq_ignore_ascii_case("html") {
            return &rest[4..];
        }
    }

    let lang_end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    if rest[..lang_end].chars().all(|c| c.is_ascii_alphanumeric()) {
        &rest[lang_end..]
    } else {
        rest
    }
}
