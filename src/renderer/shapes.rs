//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::{GameState, Rect};

/// Generate two triangles covering a rectangle
pub fn rect_quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r) = (rect.left(), rect.right());
    let (t, b) = (rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// All rectangles of the scene, back to front: ground, goal, hazards, player
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let rects = std::iter::once(&state.ground)
        .chain(std::iter::once(&state.goal))
        .chain(state.hazards.iter().map(|h| &h.rect))
        .chain(std::iter::once(&state.player.rect));

    let mut vertices = Vec::with_capacity((state.hazards.len() + 3) * 6);
    for rect in rects {
        vertices.extend_from_slice(&rect_quad(rect, rect.color.into()));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;
    use crate::sim::ColorTag;

    #[test]
    fn test_rect_quad_corners() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0, ColorTag::Goal);
        let quad = rect_quad(&rect, colors::GOAL);
        let xs: Vec<f32> = quad.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = quad.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
        assert!(quad.iter().all(|v| v.color == colors::GOAL));
    }

    #[test]
    fn test_scene_draw_order() {
        let state = GameState::default();
        let vertices = scene_vertices(&state);
        assert_eq!(vertices.len(), (state.hazards.len() + 3) * 6);
        assert_eq!(vertices[0].color, colors::GROUND);
        assert_eq!(vertices[6].color, colors::GOAL);
        assert_eq!(vertices[12].color, colors::HAZARD);
        assert_eq!(vertices[18].color, colors::MOVING_HAZARD);
        // Player drawn last so it stays visible over hazards
        assert_eq!(vertices.last().unwrap().color, colors::PLAYER);
    }

    #[test]
    fn test_flash_color_is_drawn() {
        let mut state = GameState::default();
        state.player.rect.color = ColorTag::PlayerFlash;
        let vertices = scene_vertices(&state);
        assert_eq!(vertices.last().unwrap().color, colors::PLAYER_FLASH);
    }
}
