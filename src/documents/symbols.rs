//! Symbol universes for resource pack documents.

use crate::graph::{SymbolType, SymbolTypeInfo};

static ANIMATION_CONTROLLER_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "animation_controller",
    label: "Animation Controller",
    description: "Animation controllers decide which animations to play when.",
    help_url: Some("https://bedrock.dev/c/Animations#Animation%20Controllers"),
    path_like: false,
};

static ANIMATION_CONTROLLER_STATE_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "animation_controller_state",
    label: "Animation Controller State",
    description: "A state defines a group of animations to process.",
    help_url: Some("https://bedrock.dev/c/Animations#States"),
    path_like: false,
};

static ANIMATION_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "animation",
    label: "Animation",
    description: "An animation.",
    help_url: None,
    path_like: false,
};

static ANIMATION_NICKNAME_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "animation_nickname",
    label: "Animation Nickname",
    description: "A nickname for an animation or animation controller.",
    help_url: None,
    path_like: false,
};

static CLIENT_ENTITY_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "client_entity",
    label: "Client Entity",
    description: "Client-side definition of an entity's appearance.",
    help_url: Some("https://bedrock.dev/c/Entities#Client%20Entity%20Documentation"),
    path_like: false,
};

static GEOMETRY_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "geometry",
    label: "Entity Geometry",
    description: "Geometry for an entity.",
    help_url: None,
    path_like: false,
};

static GEOMETRY_NICKNAME_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "geometry_nickname",
    label: "Geometry Nickname",
    description: "A nickname an entity gives to one of its geometries.",
    help_url: None,
    path_like: false,
};

static IMAGE_TEXTURE_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "image_texture",
    label: "Image Texture",
    description: "An image texture.",
    help_url: None,
    path_like: true,
};

static TEXTURE_NICKNAME_INFO: SymbolTypeInfo = SymbolTypeInfo {
    name: "texture_nickname",
    label: "Texture Nickname",
    description: "A nickname an entity gives to one of its textures.",
    help_url: None,
    path_like: false,
};

pub static ANIMATION_CONTROLLER: SymbolType = SymbolType::new(&ANIMATION_CONTROLLER_INFO);
pub static ANIMATION_CONTROLLER_STATE: SymbolType =
    SymbolType::new(&ANIMATION_CONTROLLER_STATE_INFO);
pub static ANIMATION: SymbolType = SymbolType::new(&ANIMATION_INFO);
pub static ANIMATION_NICKNAME: SymbolType = SymbolType::new(&ANIMATION_NICKNAME_INFO);
pub static CLIENT_ENTITY: SymbolType = SymbolType::new(&CLIENT_ENTITY_INFO);
pub static GEOMETRY: SymbolType = SymbolType::new(&GEOMETRY_INFO);
pub static GEOMETRY_NICKNAME: SymbolType = SymbolType::new(&GEOMETRY_NICKNAME_INFO);
pub static IMAGE_TEXTURE: SymbolType = SymbolType::new(&IMAGE_TEXTURE_INFO);
pub static TEXTURE_NICKNAME: SymbolType = SymbolType::new(&TEXTURE_NICKNAME_INFO);

/// Every symbol type declared by the built-in document kinds
pub fn all() -> [SymbolType; 9] {
    [
        ANIMATION_CONTROLLER,
        ANIMATION_CONTROLLER_STATE,
        ANIMATION,
        ANIMATION_NICKNAME,
        CLIENT_ENTITY,
        GEOMETRY,
        GEOMETRY_NICKNAME,
        IMAGE_TEXTURE,
        TEXTURE_NICKNAME,
    ]
}
