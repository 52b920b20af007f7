//! Write-only presentation boundary: one draw command per visible entity.

use bevy_ecs::prelude::*;

use crate::components::appearance::{Glyph, SourceRect, Sprite, TextureId, Tint};
use crate::components::items::{HealAmount, PowerupAmount};
use crate::components::world::Position;

/// Grid-aligned rectangle in cell units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    pub fn cell(position: Position) -> Self {
        Self {
            x: position.x as f32,
            y: position.y as f32,
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Tint),
    Textured {
        texture: TextureId,
        source: SourceRect,
        tint: Tint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub entity: Entity,
    pub rect: GridRect,
    pub paint: Paint,
    pub glyph: char,
}

/// Draw list for the current world state; items come before actors so actors draw on top.
pub fn collect_draw_commands(world: &World) -> Vec<DrawCommand> {
    let mut layered: Vec<(u8, DrawCommand)> = world
        .iter_entities()
        .filter_map(|e| {
            let position = e.get::<Position>()?;
            let tint = *e.get::<Tint>()?;
            let paint = match e.get::<Sprite>() {
                Some(sprite) => Paint::Textured {
                    texture: sprite.texture,
                    source: sprite.source,
                    tint,
                },
                None => Paint::Solid(tint),
            };
            let is_item = e.contains::<HealAmount>() || e.contains::<PowerupAmount>();
            let command = DrawCommand {
                entity: e.id(),
                rect: GridRect::cell(*position),
                paint,
                glyph: e.get::<Glyph>().map_or('#', |glyph| glyph.0),
            };
            Some((if is_item { 0 } else { 1 }, command))
        })
        .collect();
    layered.sort_by_key(|(layer, command)| (*layer, command.entity));
    layered.into_iter().map(|(_, command)| command).collect()
}

/// Terminal rendering of a draw list, clipped to the given cell bounds.
pub fn render_ascii(commands: &[DrawCommand], min: Position, max: Position) -> String {
    let width = (max.x - min.x + 1).max(0) as usize;
    let height = (max.y - min.y + 1).max(0) as usize;
    let mut rows = vec![vec!['.'; width]; height];
    for command in commands {
        let x = command.rect.x as i32 - min.x;
        let y = command.rect.y as i32 - min.y;
        if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
            continue;
        }
        rows[y as usize][x as usize] = command.glyph;
    }
    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
