//! A small resource pack: one pig with a controller, an animation, a
//! geometry and a texture.

pub const CONTROLLER_PATH: &str = "RP/animation_controllers/pig.json";
pub const ANIMATION_PATH: &str = "RP/animations/pig.json";
pub const ENTITY_PATH: &str = "RP/entity/pig.json";
pub const GEOMETRY_PATH: &str = "RP/models/entity/pig.geo.json";
pub const TEXTURE_PATH: &str = "RP/textures/entity/pig/pig.png";

pub const CONTROLLER: &str = r#"{
  "format_version": "1.10.0",
  "animation_controllers": {
    "walk": {
      "initial_state": "default",
      "states": {
        "default": {
          "animations": ["move"],
          "transitions": [{ "running": "q.modified_move_speed > 0.5" }]
        },
        "running": {}
      }
    }
  }
}"#;

pub const ANIMATION: &str = r#"{
  "format_version": "1.8.0",
  "animations": {
    "animation.pig.move": { "loop": true }
  }
}"#;

pub const ENTITY: &str = r#"{
  "format_version": "1.10.0",
  "minecraft:client_entity": {
    "description": {
      "identifier": "minecraft:pig",
      "textures": { "default": "textures/entity/pig/pig" },
      "geometry": { "default": "geometry.pig" },
      "animations": {
        "move": "animation.pig.move",
        "controller": "walk"
      },
      "scripts": { "animate": ["controller"] }
    }
  }
}"#;

pub const GEOMETRY: &str = r#"{
  "format_version": "1.12.0",
  "minecraft:geometry": [
    { "description": { "identifier": "geometry.pig" }, "bones": [] }
  ]
}"#;

/// An entity whose animation points at nothing.
pub const GHOST_ENTITY: &str = r#"{
  "minecraft:client_entity": {
    "description": {
      "identifier": "minecraft:ghost",
      "animations": { "float": "animation.ghost.float" }
    }
  }
}"#;
