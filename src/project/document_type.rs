//! Pluggable document classification.
//!
//! A [`DocumentType`] is a capability record: the paths it may own, the
//! loader it needs, a structural acceptance test and a factory. The built-in
//! kinds form the closed [`DocumentKind`] enum; hosts can register further
//! implementations through [`Project::with_document_types`](super::Project::with_document_types).

use std::fmt;
use std::sync::Arc;

use crate::documents::{
    BuildError, DocumentBuilder, animation, animation_controller, client_entity, geometry,
    image_texture,
};
use crate::parser::JsonNode;

/// Parsing strategy shared by a group of document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoaderKind {
    /// Parsed into a JSON tree
    Json,
    /// Opaque; only the path is used
    Raw,
}

/// What a loader hands to a document type.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Json(&'a JsonNode),
    Raw,
}

pub trait DocumentType: Send + Sync {
    /// Machine name, stored on built documents
    fn kind(&self) -> &'static str;

    /// Glob patterns for paths this type may own
    fn patterns(&self) -> &[&'static str];

    fn loader(&self) -> LoaderKind;

    /// Structural test applied after the path matched
    fn accepts(&self, content: Content<'_>) -> bool;

    /// Attach this document's definitions and references.
    fn build(&self, builder: &mut DocumentBuilder<'_>, content: Content<'_>) -> Result<(), BuildError>;
}

impl fmt::Debug for dyn DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentType")
            .field("kind", &self.kind())
            .field("loader", &self.loader())
            .finish()
    }
}

/// The built-in document kinds, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    AnimationController,
    Animation,
    ClientEntity,
    Geometry,
    ImageTexture,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::AnimationController,
        DocumentKind::Animation,
        DocumentKind::ClientEntity,
        DocumentKind::Geometry,
        DocumentKind::ImageTexture,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.kind() == name)
    }
}

impl DocumentType for DocumentKind {
    fn kind(&self) -> &'static str {
        match self {
            DocumentKind::AnimationController => animation_controller::KIND,
            DocumentKind::Animation => animation::KIND,
            DocumentKind::ClientEntity => client_entity::KIND,
            DocumentKind::Geometry => geometry::KIND,
            DocumentKind::ImageTexture => image_texture::KIND,
        }
    }

    fn patterns(&self) -> &[&'static str] {
        match self {
            DocumentKind::AnimationController => animation_controller::PATTERNS,
            DocumentKind::Animation => animation::PATTERNS,
            DocumentKind::ClientEntity => client_entity::PATTERNS,
            DocumentKind::Geometry => geometry::PATTERNS,
            DocumentKind::ImageTexture => image_texture::PATTERNS,
        }
    }

    fn loader(&self) -> LoaderKind {
        match self {
            DocumentKind::ImageTexture => LoaderKind::Raw,
            _ => LoaderKind::Json,
        }
    }

    fn accepts(&self, content: Content<'_>) -> bool {
        match (self, content) {
            (DocumentKind::AnimationController, Content::Json(root)) => {
                animation_controller::accepts(root)
            }
            (DocumentKind::Animation, Content::Json(root)) => animation::accepts(root),
            (DocumentKind::ClientEntity, Content::Json(root)) => client_entity::accepts(root),
            (DocumentKind::Geometry, Content::Json(root)) => geometry::accepts(root),
            (DocumentKind::ImageTexture, Content::Raw) => true,
            _ => false,
        }
    }

    fn build(&self, builder: &mut DocumentBuilder<'_>, content: Content<'_>) -> Result<(), BuildError> {
        match (self, content) {
            (DocumentKind::AnimationController, Content::Json(root)) => {
                animation_controller::build(builder, root)
            }
            (DocumentKind::Animation, Content::Json(root)) => animation::build(builder, root),
            (DocumentKind::ClientEntity, Content::Json(root)) => client_entity::build(builder, root),
            (DocumentKind::Geometry, Content::Json(root)) => geometry::build(builder, root),
            (DocumentKind::ImageTexture, _) => image_texture::build(builder),
            (_, Content::Raw) => Err(BuildError::MissingField("content")),
        }
    }
}

/// The built-in registry
pub fn default_document_types() -> Vec<Arc<dyn DocumentType>> {
    DocumentKind::ALL
        .into_iter()
        .map(|kind| Arc::new(kind) as Arc<dyn DocumentType>)
        .collect()
}
