//! Catalog reference data: genres, developers, platforms and tags.
//!
//! Reference rows are matched by name from client payloads and are never created or
//! deleted by the catalog endpoints.

use crate::model::game::{ReferenceDto, ReferenceNameDto};

/// Which reference table a name list or association set refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Genre,
    Developer,
    Platform,
    Tag,
}

/// A genre, developer, platform or tag row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub id: i32,
    pub name: String,
}

impl Reference {
    pub fn into_dto(self) -> ReferenceDto {
        ReferenceDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Wraps a related row's name for the single-game response shape.
pub fn name_dto(name: String) -> ReferenceNameDto {
    ReferenceNameDto { name }
}

/// Reference rows resolved from the name lists of a create or edit payload.
///
/// `None` means the payload did not mention that relation, so it is left as-is.
#[derive(Debug, Clone, Default)]
pub struct ResolvedReferences {
    pub genres: Option<Vec<Reference>>,
    pub developers: Option<Vec<Reference>>,
    pub platforms: Option<Vec<Reference>>,
}

impl ResolvedReferences {
    /// Iterates over the relations that should be replaced, with the ids to replace them by.
    pub fn replacements(&self) -> impl Iterator<Item = (ReferenceKind, Vec<i32>)> + '_ {
        [
            (ReferenceKind::Genre, &self.genres),
            (ReferenceKind::Developer, &self.developers),
            (ReferenceKind::Platform, &self.platforms),
        ]
        .into_iter()
        .filter_map(|(kind, refs)| {
            refs.as_ref()
                .map(|refs| (kind, refs.iter().map(|r| r.id).collect()))
        })
    }
}
