//! Endpoint table.
//!
//! Every Marvel endpoint is one of three shapes over the six resource kinds:
//!
//! | Shape   | Path                        |
//! |---------|-----------------------------|
//! | list    | `{resource}`                |
//! | by id   | `{resource}/{id}`           |
//! | related | `{resource}/{id}/{related}` |
//!
//! where `related` is any kind other than `resource`.

use std::fmt;

use crate::error::Error;

/// The six Marvel resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `characters`
    Character,
    /// `comics`
    Comic,
    /// `creators`
    Creator,
    /// `events`
    Event,
    /// `series`
    Series,
    /// `stories`
    Story,
}

impl Resource {
    /// All resource kinds
    pub const ALL: [Resource; 6] = [
        Resource::Character,
        Resource::Comic,
        Resource::Creator,
        Resource::Event,
        Resource::Series,
        Resource::Story,
    ];

    /// URL path segment
    pub fn path_segment(self) -> &'static str {
        match self {
            Resource::Character => "characters",
            Resource::Comic => "comics",
            Resource::Creator => "creators",
            Resource::Event => "events",
            Resource::Series => "series",
            Resource::Story => "stories",
        }
    }

    /// The five kinds this one can list related entities of
    pub fn relations(self) -> impl Iterator<Item = Resource> {
        Self::ALL.into_iter().filter(move |r| *r != self)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// A resolved API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `{resource}`
    List(Resource),
    /// `{resource}/{id}`
    ById(Resource, u32),
    /// `{resource}/{id}/{related}`
    Related {
        /// Parent kind
        resource: Resource,
        /// Parent id
        id: u32,
        /// Kind being listed
        related: Resource,
    },
}

impl Endpoint {
    /// Resolve a (resource, id, relation) triple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] when a relation is given without an
    /// id, or when the relation is the resource's own kind.
    pub fn resolve(resource: Resource, id: Option<u32>, related: Option<Resource>) -> Result<Self, Error> {
        match (id, related) {
            (None, None) => Ok(Endpoint::List(resource)),
            (Some(id), None) => Ok(Endpoint::ById(resource, id)),
            (Some(id), Some(related)) => Self::related(resource, id, related),
            (None, Some(related)) => Err(Error::InvalidEndpoint(format!(
                "listing {} of {} requires an id",
                related, resource
            ))),
        }
    }

    /// `{resource}/{id}/{related}`, rejecting a relation to the same kind
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `related == resource`.
    pub fn related(resource: Resource, id: u32, related: Resource) -> Result<Self, Error> {
        if resource == related {
            return Err(Error::InvalidEndpoint(format!(
                "{} has no {} relation",
                resource, related
            )));
        }
        Ok(Endpoint::Related {
            resource,
            id,
            related,
        })
    }

    /// Kind of entity in the response
    pub fn entity(&self) -> Resource {
        match *self {
            Endpoint::List(resource) | Endpoint::ById(resource, _) => resource,
            Endpoint::Related { related, .. } => related,
        }
    }

    /// Whether the endpoint takes filter parameters
    pub fn accepts_params(&self) -> bool {
        !matches!(self, Endpoint::ById(..))
    }

    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::List(resource) => resource.path_segment().to_string(),
            Endpoint::ById(resource, id) => format!("{}/{}", resource.path_segment(), id),
            Endpoint::Related {
                resource,
                id,
                related,
            } => format!(
                "{}/{}/{}",
                resource.path_segment(),
                id,
                related.path_segment()
            ),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_by_id_paths() {
        assert_eq!(Endpoint::List(Resource::Character).path(), "characters");
        assert_eq!(
            Endpoint::ById(Resource::Character, 1009610).path(),
            "characters/1009610"
        );
        assert_eq!(Endpoint::List(Resource::Story).to_string(), "stories");
    }

    #[test]
    fn test_related_paths_use_plural_segments() {
        let endpoint = Endpoint::related(Resource::Story, 7, Resource::Character).unwrap();
        assert_eq!(endpoint.path(), "stories/7/characters");
        assert_eq!(endpoint.entity(), Resource::Character);

        let endpoint = Endpoint::related(Resource::Creator, 30, Resource::Comic).unwrap();
        assert_eq!(endpoint.path(), "creators/30/comics");
    }

    #[test]
    fn test_full_table() {
        let mut count = 0;
        for resource in Resource::ALL {
            assert!(Endpoint::resolve(resource, None, None).is_ok());
            assert!(Endpoint::resolve(resource, Some(1), None).is_ok());
            for related in resource.relations() {
                let endpoint = Endpoint::resolve(resource, Some(1), Some(related)).unwrap();
                assert_eq!(endpoint.entity(), related);
                count += 1;
            }
        }
        assert_eq!(count, 30);
    }

    #[test]
    fn test_self_relation_rejected() {
        let err = Endpoint::related(Resource::Comic, 1, Resource::Comic).unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_relation_without_id_rejected() {
        let err = Endpoint::resolve(Resource::Event, None, Some(Resource::Comic)).unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_accepts_params() {
        assert!(Endpoint::List(Resource::Series).accepts_params());
        assert!(!Endpoint::ById(Resource::Series, 1).accepts_params());
    }
}
