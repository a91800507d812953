/// Produces the audit note attached to imported groups
pub trait NoteTranslator: Send + Sync {
    fn import_note(&self, language: &str, operator_name: &str) -> String;
}

/// Built-in translations; unsupported languages get English
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticNoteTranslator;

impl NoteTranslator for StaticNoteTranslator {
    fn import_note(&self, language: &str, operator_name: &str) -> String {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match primary.as_str() {
            "de" => format!("Aus Datei importiert von {}", operator_name),
            "fr" => format!("Importé depuis un fichier par {}", operator_name),
            "es" => format!("Importado desde un archivo por {}", operator_name),
            "it" => format!("Importato da file da {}", operator_name),
            "nl" => format!("Geïmporteerd uit bestand door {}", operator_name),
            "pt" => format!("Importado de arquivo por {}", operator_name),
            _ => format!("Imported from file by {}", operator_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        let translator = StaticNoteTranslator;
        assert_eq!(
            translator.import_note("de", "Alex"),
            "Aus Datei importiert von Alex"
        );
        assert_eq!(
            translator.import_note("fr-CA", "Alex"),
            "Importé depuis un fichier par Alex"
        );
        assert_eq!(
            translator.import_note("PT_br", "Alex"),
            "Importado de arquivo por Alex"
        );
    }

    #[test]
    fn test_english_fallback() {
        let translator = StaticNoteTranslator;
        assert_eq!(translator.import_note("en", "Sam"), "Imported from file by Sam");
        assert_eq!(translator.import_note("xx", "Sam"), "Imported from file by Sam");
        assert_eq!(translator.import_note("", "Sam"), "Imported from file by Sam");
    }
}
