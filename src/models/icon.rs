//! Category icons
//!
//! Icons are stored as kebab-case keys. Known keys map to a glyph through a
//! static table; anything else is kept verbatim and rendered with the
//! placeholder glyph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph shown for unknown icon keys and for categories that no longer exist
pub const PLACEHOLDER_GLYPH: &str = "❓";

macro_rules! define_icons {
    ($($variant:ident => $key:literal, $glyph:literal;)+) => {
        /// A symbolic icon reference
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum Icon {
            $($variant,)+
            /// Placeholder for a missing category
            Unknown,
            /// A key this build does not recognize
            Other(String),
        }

        impl Icon {
            /// Every known icon, in table order
            pub fn known() -> &'static [Icon] {
                &[$(Icon::$variant,)+]
            }

            /// The persisted key
            pub fn key(&self) -> &str {
                match self {
                    $(Icon::$variant => $key,)+
                    Icon::Unknown => "unknown",
                    Icon::Other(key) => key,
                }
            }

            /// The glyph to render
            pub fn glyph(&self) -> &'static str {
                match self {
                    $(Icon::$variant => $glyph,)+
                    Icon::Unknown | Icon::Other(_) => PLACEHOLDER_GLYPH,
                }
            }
        }

        impl From<String> for Icon {
            fn from(key: String) -> Self {
                match key.trim().to_lowercase().as_str() {
                    $($key => Icon::$variant,)+
                    "unknown" => Icon::Unknown,
                    _ => Icon::Other(key),
                }
            }
        }
    };
}

define_icons! {
    Wallet => "wallet", "👛";
    Briefcase => "briefcase", "💼";
    Gift => "gift", "🎁";
    TrendingUp => "trending-up", "📈";
    ShoppingCart => "shopping-cart", "🛒";
    Utensils => "utensils", "🍴";
    Home => "home", "🏠";
    Car => "car", "🚗";
    Zap => "zap", "⚡";
    Heart => "heart", "❤";
    Film => "film", "🎬";
    Plane => "plane", "✈";
    Book => "book", "📚";
    Smartphone => "smartphone", "📱";
    Coffee => "coffee", "☕";
    Shirt => "shirt", "👕";
    FileText => "file-text", "📄";
    PiggyBank => "piggy-bank", "🐷";
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Wallet
    }
}

impl From<&str> for Icon {
    fn from(key: &str) -> Self {
        Icon::from(key.to_string())
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.key().to_string()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
