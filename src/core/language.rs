//! Static language vocabulary of the translation API

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::TranslateError;

macro_rules! languages {
    ($($variant:ident => $code:literal, $name:literal;)+) => {
        /// A language the API can translate to or from
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Language {
            $($variant,)+
        }

        impl Language {
            /// Every language, in the order the service lists them for English names
            pub const ALL: &'static [Language] = &[$(Language::$variant,)+];

            /// Code sent on the wire
            pub fn code(self) -> &'static str {
                match self {
                    $(Language::$variant => $code,)+
                }
            }

            /// English display name
            pub fn name(self) -> &'static str {
                match self {
                    $(Language::$variant => $name,)+
                }
            }

            /// Look up a wire code. Regional suffixes are matched case-insensitively.
            pub fn from_code(code: &str) -> Option<Language> {
                match code {
                    $($code => Some(Language::$variant),)+
                    _ => Self::ALL
                        .iter()
                        .copied()
                        .find(|l| l.code().eq_ignore_ascii_case(code)),
                }
            }
        }
    };
}

languages! {
    Afrikaans          => "af", "Afrikaans";
    Albanian           => "sq", "Albanian";
    Amharic            => "am", "Amharic";
    Arabic             => "ar", "Arabic";
    Armenian           => "hy", "Armenian";
    Azerbaijani        => "az", "Azerbaijani";
    Basque             => "eu", "Basque";
    Belarusian         => "be", "Belarusian";
    Bengali            => "bn", "Bengali";
    Bosnian            => "bs", "Bosnian";
    Bulgarian          => "bg", "Bulgarian";
    Catalan            => "ca", "Catalan";
    Cebuano            => "ceb", "Cebuano";
    Chichewa           => "ny", "Chichewa";
    ChineseSimplified  => "zh", "Chinese (Simplified)";
    ChineseTraditional => "zh-TW", "Chinese (Traditional)";
    Corsican           => "co", "Corsican";
    Croatian           => "hr", "Croatian";
    Czech              => "cs", "Czech";
    Danish             => "da", "Danish";
    Dutch              => "nl", "Dutch";
    English            => "en", "English";
    Esperanto          => "eo", "Esperanto";
    Estonian           => "et", "Estonian";
    Filipino           => "tl", "Filipino";
    Finnish            => "fi", "Finnish";
    French             => "fr", "French";
    Frisian            => "fy", "Frisian";
    Galician           => "gl", "Galician";
    Georgian           => "ka", "Georgian";
    German             => "de", "German";
    Greek              => "el", "Greek";
    Gujarati           => "gu", "Gujarati";
    HaitianCreole      => "ht", "Haitian Creole";
    Hausa              => "ha", "Hausa";
    Hawaiian           => "haw", "Hawaiian";
    Hebrew             => "iw", "Hebrew";
    Hindi              => "hi", "Hindi";
    Hmong              => "hmn", "Hmong";
    Hungarian          => "hu", "Hungarian";
    Icelandic          => "is", "Icelandic";
    Igbo               => "ig", "Igbo";
    Indonesian         => "id", "Indonesian";
    Irish              => "ga", "Irish";
    Italian            => "it", "Italian";
    Japanese           => "ja", "Japanese";
    Javanese           => "jw", "Javanese";
    Kannada            => "kn", "Kannada";
    Kazakh             => "kk", "Kazakh";
    Khmer              => "km", "Khmer";
    Korean             => "ko", "Korean";
    Kurdish            => "ku", "Kurdish (Kurmanji)";
    Kyrgyz             => "ky", "Kyrgyz";
    Lao                => "lo", "Lao";
    Latin              => "la", "Latin";
    Latvian            => "lv", "Latvian";
    Lithuanian         => "lt", "Lithuanian";
    Luxembourgish      => "lb", "Luxembourgish";
    Macedonian         => "mk", "Macedonian";
    Malagasy           => "mg", "Malagasy";
    Malay              => "ms", "Malay";
    Malayalam          => "ml", "Malayalam";
    Maltese            => "mt", "Maltese";
    Maori              => "mi", "Maori";
    Marathi            => "mr", "Marathi";
    Mongolian          => "mn", "Mongolian";
    Myanmar            => "my", "Myanmar (Burmese)";
    Nepali             => "ne", "Nepali";
    Norwegian          => "no", "Norwegian";
    Pashto             => "ps", "Pashto";
    Persian            => "fa", "Persian";
    Polish             => "pl", "Polish";
    Portuguese         => "pt", "Portuguese";
    Punjabi            => "pa", "Punjabi";
    Romanian           => "ro", "Romanian";
    Russian            => "ru", "Russian";
    Samoan             => "sm", "Samoan";
    ScotsGaelic        => "gd", "Scots Gaelic";
    Serbian            => "sr", "Serbian";
    Sesotho            => "st", "Sesotho";
    Shona              => "sn", "Shona";
    Sindhi             => "sd", "Sindhi";
    Sinhala            => "si", "Sinhala";
    Slovak             => "sk", "Slovak";
    Slovenian          => "sl", "Slovenian";
    Somali             => "so", "Somali";
    Spanish            => "es", "Spanish";
    Sundanese          => "su", "Sundanese";
    Swahili            => "sw", "Swahili";
    Swedish            => "sv", "Swedish";
    Tajik              => "tg", "Tajik";
    Tamil              => "ta", "Tamil";
    Telugu             => "te", "Telugu";
    Thai               => "th", "Thai";
    Turkish            => "tr", "Turkish";
    Ukrainian          => "uk", "Ukrainian";
    Urdu               => "ur", "Urdu";
    Uzbek              => "uz", "Uzbek";
    Vietnamese         => "vi", "Vietnamese";
    Welsh              => "cy", "Welsh";
    Xhosa              => "xh", "Xhosa";
    Yiddish            => "yi", "Yiddish";
    Yoruba             => "yo", "Yoruba";
    Zulu               => "zu", "Zulu";
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s.trim()).ok_or_else(|| TranslateError::Config {
            message: format!("unknown language code: {}", s),
        })
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language code: {}", code)))
    }
}
