//! Movie schema and record types
//!
//! The schema is data: `MOVIE_FIELDS` is a static table of field
//! descriptors that the validator walks in order. The record types are the
//! strongly typed values that a successful validation collapses into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Genre tags accepted by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Romance,
    Crime,
    Adventure,
    Comedy,
    Drama,
    Thriller,
    Fantasy,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// Every tag, in enumeration order
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Romance,
        Genre::Crime,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Thriller,
        Genre::Fantasy,
        Genre::Horror,
        Genre::SciFi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Romance => "Romance",
            Genre::Crime => "Crime",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Thriller => "Thriller",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Case-insensitive comparison used by genre filtering
    pub fn matches_ignore_case(&self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }

    /// `'Action' | 'Romance' | ...` for enum error messages
    pub fn expected_list() -> String {
        Genre::ALL
            .iter()
            .map(|g| format!("'{}'", g.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive parse
impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown genre '{}'", s))
    }
}

/// Value kind of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string
    Text,
    /// Whole number; integral floats such as `2010.0` are accepted
    Integer,
    /// Any JSON number
    Number,
    /// String that must parse as an absolute URL
    Url,
    /// Array of `Genre` tags
    GenreList,
}

/// Extra constraint applied after the kind check passes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    None,
    /// Text or list must have at least one element
    NonEmpty,
    /// Inclusive numeric bounds
    Range { min: f64, max: f64 },
}

/// What happens when a field is absent in full validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence {
    Required,
    /// Absent value is replaced with this number
    DefaultNumber(f64),
}

/// One row of the schema table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    /// JSON key
    pub name: &'static str,
    /// Capitalized name used in messages
    pub label: &'static str,
    pub kind: FieldKind,
    pub constraint: Constraint,
    pub presence: Presence,
}

impl FieldDef {
    pub const fn required(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        constraint: Constraint,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            constraint,
            presence: Presence::Required,
        }
    }

    pub const fn with_default(mut self, default: f64) -> Self {
        self.presence = Presence::DefaultNumber(default);
        self
    }
}

/// Default movie rating when none is supplied on creation
pub const DEFAULT_RATE: f64 = 5.0;

/// The movie schema, in report order
pub static MOVIE_FIELDS: &[FieldDef] = &[
    FieldDef::required("title", "Title", FieldKind::Text, Constraint::NonEmpty),
    FieldDef::required(
        "year",
        "Year",
        FieldKind::Integer,
        Constraint::Range { min: 1900.0, max: 2024.0 },
    ),
    FieldDef::required("director", "Director", FieldKind::Text, Constraint::None),
    FieldDef::required(
        "duration",
        "Duration",
        FieldKind::Integer,
        Constraint::Range { min: 1.0, max: 300.0 },
    ),
    FieldDef::required(
        "rate",
        "Rate",
        FieldKind::Number,
        Constraint::Range { min: 0.0, max: 10.0 },
    )
    .with_default(DEFAULT_RATE),
    FieldDef::required("poster", "Poster", FieldKind::Url, Constraint::None),
    FieldDef::required("genre", "Genre", FieldKind::GenreList, Constraint::NonEmpty),
];

/// A fully validated movie without its store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u16,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    pub fn has_genre_ignore_case(&self, tag: &str) -> bool {
        self.genre.iter().any(|g| g.matches_ignore_case(tag))
    }
}

/// A movie as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    #[serde(flatten)]
    pub movie: Movie,
}

impl MovieRecord {
    pub fn new(id: impl Into<String>, movie: Movie) -> Self {
        Self {
            id: id.into(),
            movie,
        }
    }
}

/// Validated subset of movie fields used for partial updates.
///
/// Has no `id` field, so a merge cannot rewrite the record id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }

    /// Overwrites every field present in the patch
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
    }
}
