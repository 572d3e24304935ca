//! Content pools: styles, color schemes, font pairings, layouts, backgrounds,
//! visual effects and the text templates used for generated sections.
//!
//! Pools are static, keyed by upper-case names. A style draws from the entry
//! named like the style itself and falls back to the pool's default entry
//! when there is none. `validate_catalog` checks at startup that every style
//! resolves to a non-empty entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::templates::GenerationError;

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

/// Visual/tone style of a generated resume template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleKey {
    Modern,
    Classic,
    Minimal,
    Creative,
    Professional,
    Executive,
    Technical,
    Academic,
    Startup,
    Elegant,
    Dynamic,
    Gradient,
    Minimalist,
    Bold,
    Futuristic,
}

impl StyleKey {
    pub const ALL: [StyleKey; 15] = [
        StyleKey::Modern,
        StyleKey::Classic,
        StyleKey::Minimal,
        StyleKey::Creative,
        StyleKey::Professional,
        StyleKey::Executive,
        StyleKey::Technical,
        StyleKey::Academic,
        StyleKey::Startup,
        StyleKey::Elegant,
        StyleKey::Dynamic,
        StyleKey::Gradient,
        StyleKey::Minimalist,
        StyleKey::Bold,
        StyleKey::Futuristic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKey::Modern => "MODERN",
            StyleKey::Classic => "CLASSIC",
            StyleKey::Minimal => "MINIMAL",
            StyleKey::Creative => "CREATIVE",
            StyleKey::Professional => "PROFESSIONAL",
            StyleKey::Executive => "EXECUTIVE",
            StyleKey::Technical => "TECHNICAL",
            StyleKey::Academic => "ACADEMIC",
            StyleKey::Startup => "STARTUP",
            StyleKey::Elegant => "ELEGANT",
            StyleKey::Dynamic => "DYNAMIC",
            StyleKey::Gradient => "GRADIENT",
            StyleKey::Minimalist => "MINIMALIST",
            StyleKey::Bold => "BOLD",
            StyleKey::Futuristic => "FUTURISTIC",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StyleKey::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GenerationError::UnknownStyle(s.to_string()))
    }
}

// Entries used when a pool has nothing keyed by the style name.
pub const DEFAULT_COLOR_SCHEME: &str = "PURPLE";
pub const DEFAULT_FONT_PAIRING: &str = "MODERN";
pub const DEFAULT_LAYOUT: &str = "SINGLE_COLUMN";
pub const DEFAULT_BACKGROUNDS: &str = "MODERN";
pub const DEFAULT_SUMMARY: &str = "PROFESSIONAL";
pub const DEFAULT_EXPERIENCE: &str = "ACHIEVEMENT";
pub const DEFAULT_SKILLS: &str = "TECHNICAL";

// ────────────────────────────────────────────────────────────────────────────
// Pool value types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontPairing {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Section arrangement of a layout. `Columns` groups sections that render
/// side by side; `Flat` is a single ordered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LayoutSections {
    Flat(&'static [&'static str]),
    Columns(&'static [&'static [&'static str]]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub sections: LayoutSections,
    #[serde(rename = "className")]
    pub class_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VisualEffect {
    Gradient {
        colors: &'static [&'static str],
        opacity: f32,
    },
    Mesh {
        pattern: &'static str,
        opacity: f32,
    },
    Dots {
        size: u32,
        spacing: u32,
        opacity: f32,
    },
    Lines {
        thickness: u32,
        spacing: u32,
        opacity: f32,
    },
    Waves {
        amplitude: u32,
        frequency: u32,
        opacity: f32,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Pool data
// ────────────────────────────────────────────────────────────────────────────

pub const COLOR_SCHEMES: &[(&str, ColorScheme)] = &[
    ("PURPLE", scheme("#6B46C1", "#9F7AEA", "#B794F4", "#2D3748", "#FFFFFF")),
    ("BLUE", scheme("#2B6CB0", "#4299E1", "#63B3ED", "#2D3748", "#FFFFFF")),
    ("GREEN", scheme("#2F855A", "#48BB78", "#68D391", "#2D3748", "#FFFFFF")),
    ("DARK", scheme("#1A202C", "#2D3748", "#4A5568", "#FFFFFF", "#171923")),
    ("ELEGANT", scheme("#744210", "#975A16", "#B7791F", "#2D3748", "#FFFFF0")),
    ("SUNSET", scheme("#F6AD55", "#ED8936", "#DD6B20", "#2D3748", "#FFFAF0")),
    ("OCEAN", scheme("#2B6CB0", "#4299E1", "#63B3ED", "#2D3748", "#EBF8FF")),
    ("FOREST", scheme("#2F855A", "#48BB78", "#68D391", "#2D3748", "#F0FFF4")),
    ("MIDNIGHT", scheme("#2A4365", "#2B6CB0", "#4299E1", "#E2E8F0", "#1A365D")),
    ("ROSE", scheme("#B83280", "#D53F8C", "#ED64A6", "#2D3748", "#FFF5F7")),
];

const fn scheme(
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    text: &'static str,
    background: &'static str,
) -> ColorScheme {
    ColorScheme {
        primary,
        secondary,
        accent,
        text,
        background,
    }
}

pub const FONT_PAIRINGS: &[(&str, FontPairing)] = &[
    ("MODERN", fonts("Inter", "Inter")),
    ("CLASSIC", fonts("Merriweather", "Source Sans Pro")),
    ("MINIMAL", fonts("Work Sans", "Work Sans")),
    ("CREATIVE", fonts("Playfair Display", "Raleway")),
    ("PROFESSIONAL", fonts("Montserrat", "Open Sans")),
    ("ELEGANT", fonts("Cormorant Garamond", "Lora")),
    ("TECH", fonts("Space Grotesk", "IBM Plex Sans")),
    ("MODERN_SERIF", fonts("DM Serif Display", "DM Sans")),
    ("GEOMETRIC", fonts("Outfit", "Plus Jakarta Sans")),
    ("CLASSIC_SERIF", fonts("Spectral", "Source Serif Pro")),
];

const fn fonts(heading: &'static str, body: &'static str) -> FontPairing {
    FontPairing { heading, body }
}

pub const LAYOUTS: &[(&str, LayoutDescriptor)] = &[
    (
        "SINGLE_COLUMN",
        LayoutDescriptor {
            id: "single-column",
            name: "Single Column",
            sections: LayoutSections::Flat(&["header", "summary", "experience", "education", "skills"]),
            class_name: "max-w-2xl mx-auto space-y-6",
        },
    ),
    (
        "TWO_COLUMN",
        LayoutDescriptor {
            id: "two-column",
            name: "Two Column",
            sections: LayoutSections::Columns(&[
                &["header"],
                &["summary", "experience"],
                &["education", "skills"],
            ]),
            class_name: "grid grid-cols-1 md:grid-cols-2 gap-6",
        },
    ),
    (
        "MODERN_SPLIT",
        LayoutDescriptor {
            id: "modern-split",
            name: "Modern Split",
            sections: LayoutSections::Columns(&[
                &["header", "summary"],
                &["skills"],
                &["experience", "education"],
            ]),
            class_name: "grid grid-cols-1 md:grid-cols-3 gap-6",
        },
    ),
    (
        "MODERN_CARDS",
        LayoutDescriptor {
            id: "modern-cards",
            name: "Modern Cards",
            sections: LayoutSections::Columns(&[
                &["header"],
                &["summary", "skills"],
                &["experience"],
                &["education"],
            ]),
            class_name: "grid gap-6",
        },
    ),
    (
        "TIMELINE",
        LayoutDescriptor {
            id: "timeline",
            name: "Timeline",
            sections: LayoutSections::Columns(&[
                &["header", "summary"],
                &["experience", "education"],
                &["skills"],
            ]),
            class_name: "space-y-8 relative before:absolute before:left-0 before:top-0 before:bottom-0 before:w-0.5 before:bg-gray-200",
        },
    ),
    (
        "MAGAZINE",
        LayoutDescriptor {
            id: "magazine",
            name: "Magazine",
            sections: LayoutSections::Columns(&[
                &["header"],
                &["summary", "skills"],
                &["experience", "education"],
            ]),
            class_name: "grid grid-cols-12 gap-6",
        },
    ),
];

pub const BACKGROUND_IMAGES: &[(&str, &[&str])] = &[
    (
        "MODERN",
        &[
            "https://images.unsplash.com/photo-1557683316-973673baf926?w=800&auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=800&auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1557682224-5b8590cd9ec5?w=800&auto=format&fit=crop&q=80",
        ],
    ),
    (
        "CLASSIC",
        &[
            "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=800&auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1579546929662-711aa81148cf?w=800&auto=format&fit=crop&q=80",
        ],
    ),
    (
        "MINIMAL",
        &[
            "https://images.unsplash.com/photo-1557682250-33bd709cbe85?w=800&auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1557682260-96773eb01377?w=800&auto=format&fit=crop&q=80",
        ],
    ),
    (
        "CREATIVE",
        &[
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1550745165-3bc6d5a12fcc?w=800&auto=format&fit=crop&q=80",
        ],
    ),
    (
        "PROFESSIONAL",
        &[
            "https://images.unsplash.com/photo-1557683311-eac922347aa1?w=800&auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1557683304-673a23048d34?w=800&auto=format&fit=crop&q=80",
        ],
    ),
];

pub const VISUAL_EFFECTS: &[(&str, VisualEffect)] = &[
    (
        "GRADIENT",
        VisualEffect::Gradient {
            colors: &["from-purple-500", "to-pink-500"],
            opacity: 0.1,
        },
    ),
    (
        "MESH",
        VisualEffect::Mesh {
            pattern: "diagonal",
            opacity: 0.05,
        },
    ),
    (
        "DOTS",
        VisualEffect::Dots {
            size: 2,
            spacing: 20,
            opacity: 0.1,
        },
    ),
    (
        "LINES",
        VisualEffect::Lines {
            thickness: 1,
            spacing: 40,
            opacity: 0.1,
        },
    ),
    (
        "WAVES",
        VisualEffect::Waves {
            amplitude: 20,
            frequency: 100,
            opacity: 0.1,
        },
    ),
];

pub const SUMMARY_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "PROFESSIONAL",
        &[
            "Accomplished {role} with {years}+ years of experience in {industry}. Proven track record of {achievement} and {skill}. Seeking to leverage expertise in {expertise} to drive success in a challenging role.",
            "Results-driven {role} specializing in {expertise} across {industry}. Demonstrated success in {achievement} through innovative approaches and {skill}. Committed to delivering exceptional results in fast-paced environments.",
            "Strategic {role} with extensive experience in {industry}. Expert in {expertise} with a focus on {achievement}. Proven ability to {skill} while maintaining high standards of excellence.",
        ],
    ),
    (
        "CREATIVE",
        &[
            "Innovative {role} passionate about {expertise}. Bringing fresh perspectives to {industry} through {skill} and creative problem-solving. Known for {achievement} with a unique approach.",
            "Forward-thinking {role} with a creative edge in {industry}. Combines {skill} with artistic vision to achieve {achievement}. Eager to bring creative solutions to challenging projects.",
            "Imaginative {role} with a proven ability to think outside the box. Specializing in {expertise} with a focus on {achievement}. Brings creativity and {skill} to every project.",
        ],
    ),
    (
        "TECHNICAL",
        &[
            "Tech-savvy {role} with deep expertise in {expertise}. Proven track record of {achievement} using cutting-edge technologies. Skilled in {skill} and continuous learning.",
            "Detail-oriented {role} specializing in {industry} technologies. Expert in {expertise} with demonstrated success in {achievement}. Strong foundation in {skill}.",
            "Analytical {role} with a focus on technological innovation. Experienced in {expertise} and {skill}. Proven history of {achievement} through technical excellence.",
        ],
    ),
];

pub const EXPERIENCE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "ACHIEVEMENT",
        &[
            "Led {project} initiative resulting in {result}% improvement in {metric}",
            "Spearheaded {project} that generated {result} in {metric} within {timeframe}",
            "Implemented {project} strategy leading to {result}% increase in {metric}",
        ],
    ),
    (
        "RESPONSIBILITY",
        &[
            "Managed team of {size} professionals working on {project}",
            "Oversaw {project} operations with annual budget of {budget}",
            "Developed and maintained {project} serving {size} users",
        ],
    ),
    (
        "TECHNICAL",
        &[
            "Architected and deployed {project} using {technologies}",
            "Optimized {project} performance resulting in {result}% improvement",
            "Implemented {technologies} solution for {project} requirements",
        ],
    ),
];

pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "TECHNICAL",
        &[
            "Programming Languages",
            "Web Technologies",
            "Database Systems",
            "Cloud Platforms",
            "Development Tools",
        ],
    ),
    (
        "SOFT",
        &[
            "Leadership",
            "Communication",
            "Problem Solving",
            "Team Collaboration",
            "Project Management",
        ],
    ),
    (
        "CREATIVE",
        &[
            "Design Tools",
            "Visual Communication",
            "Content Creation",
            "Brand Development",
            "User Experience",
        ],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Every pool entry a style draws from, resolved to concrete data.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPools {
    pub colors: ColorScheme,
    pub fonts: FontPairing,
    pub layout: LayoutDescriptor,
    pub backgrounds: &'static [&'static str],
    pub summaries: &'static [&'static str],
    pub experiences: &'static [&'static str],
    pub skills: &'static [&'static str],
}

/// Looks up `key` in `pool`, substituting the entry named `default` when the
/// key has no dedicated entry.
fn lookup<T: Copy>(
    pool_name: &'static str,
    pool: &[(&'static str, T)],
    key: &str,
    default: &str,
) -> Result<T, GenerationError> {
    pool.iter()
        .find(|(name, _)| *name == key)
        .or_else(|| pool.iter().find(|(name, _)| *name == default))
        .map(|(_, value)| *value)
        .ok_or_else(|| GenerationError::MissingPoolEntry {
            pool: pool_name,
            key: key.to_string(),
        })
}

fn non_empty(
    pool_name: &'static str,
    key: &str,
    items: &'static [&'static str],
) -> Result<&'static [&'static str], GenerationError> {
    if items.is_empty() {
        return Err(GenerationError::EmptyPool {
            pool: pool_name,
            key: key.to_string(),
        });
    }
    Ok(items)
}

/// Resolves all pools for `style`.
pub fn resolve(style: StyleKey) -> Result<ResolvedPools, GenerationError> {
    let key = style.as_str();

    let backgrounds = lookup("backgrounds", BACKGROUND_IMAGES, key, DEFAULT_BACKGROUNDS)?;
    let summaries = lookup("summaries", SUMMARY_TEMPLATES, key, DEFAULT_SUMMARY)?;

    Ok(ResolvedPools {
        colors: lookup("colors", COLOR_SCHEMES, key, DEFAULT_COLOR_SCHEME)?,
        fonts: lookup("fonts", FONT_PAIRINGS, key, DEFAULT_FONT_PAIRING)?,
        layout: lookup("layouts", LAYOUTS, key, DEFAULT_LAYOUT)?,
        backgrounds: non_empty("backgrounds", key, backgrounds)?,
        summaries: non_empty("summaries", key, summaries)?,
        // An empty experience pool is allowed: it yields no bullets.
        experiences: lookup("experiences", EXPERIENCE_TEMPLATES, key, DEFAULT_EXPERIENCE)?,
        skills: lookup("skills", SKILL_CATEGORIES, key, DEFAULT_SKILLS)?,
    })
}

/// Checks that every style resolves and that the global effect pool has
/// something to pick from. Run once at startup.
pub fn validate_catalog() -> Result<(), GenerationError> {
    for style in StyleKey::ALL {
        resolve(style)?;
    }
    if VISUAL_EFFECTS.is_empty() {
        return Err(GenerationError::EmptyPool {
            pool: "visual_effects",
            key: "*".to_string(),
        });
    }
    Ok(())
}
