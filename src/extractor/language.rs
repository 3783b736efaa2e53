use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// Best-effort ISO 639-1 code for the extracted text, stored with the blog
/// row. `None` when the text is too short or the detector is unsure.
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return None;
    }

    if let Some(info) = detect(text)
        && info.confidence() >= MIN_CONFIDENCE
    {
        return Some(lang_to_code(info.lang()));
    }

    None
}

fn lang_to_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Urd => "ur".to_string(),
        Lang::Ara => "ar".to_string(),
        Lang::Hin => "hi".to_string(),
        Lang::Spa => "es".to_string(),
        Lang::Fra => "fr".to_string(),
        Lang::Deu => "de".to_string(),
        Lang::Por => "pt".to_string(),
        Lang::Rus => "ru".to_string(),
        Lang::Cmn => "zh".to_string(),
        Lang::Jpn => "ja".to_string(),
        Lang::Tur => "tr".to_string(),
        _ => format!("{:?}", lang).to_lowercase(),
    }
}
