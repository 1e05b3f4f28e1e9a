//! Render pass
//!
//! Clear, translate by the pan offset (and scale by zoom when enabled),
//! paint one block per cell in row-major order, restore, then draw the drag
//! guide in screen space.

use super::controller::ViewportController;
use super::mapping::GridLayout;
use crate::error::Result;
use crate::scene::{Block, Scene};
use crate::sim::{Cell, CellEngine};
use crate::surface::Surface;
use crate::theme::Theme;

/// One block per cell, positioned in world space and colored by state
pub fn build_scene<E: CellEngine + ?Sized>(
    engine: &E,
    layout: &GridLayout,
    theme: &Theme,
) -> Result<Scene> {
    let size = engine.size();
    let mut scene = Scene::with_capacity(size * size);

    for row in 0..size {
        for col in 0..size {
            let cell = engine
                .cell_state(engine.index_from_coords(col, row))
                .unwrap_or(Cell::Dead);
            let origin = layout.cell_origin(col, row);
            scene.push(Block::new(
                origin.x,
                origin.y,
                layout.cell_size(),
                layout.cell_size(),
                Some(theme.cell_color(cell)),
            )?);
        }
    }

    Ok(scene)
}

/// Draw one frame. Returns the grid scene that was painted.
pub fn render_frame<S, E>(
    surface: &mut S,
    controller: &ViewportController,
    engine: &E,
    theme: &Theme,
    show_guide: bool,
) -> Result<Scene>
where
    S: Surface + ?Sized,
    E: CellEngine + ?Sized,
{
    let scene = build_scene(engine, controller.layout(), theme)?;
    let pan = controller.state().pan_offset;

    surface.clear(theme.background);
    surface.save();
    surface.translate(pan.x, pan.y);
    if controller.options().apply_zoom {
        let scale = controller.scale();
        surface.scale(scale, scale);
    }
    scene.draw(surface);
    surface.restore();

    if show_guide {
        if let Some(guide) = controller.guide() {
            guide.draw(surface);
        }
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Vector2d;
    use crate::sim::Board;
    use crate::surface::{DrawCommand, RecordingSurface};
    use crate::viewport::ViewportOptions;

    fn controller_for(size: usize) -> ViewportController {
        let layout = GridLayout::new(50.0, 1.0, size).unwrap();
        ViewportController::new(layout, ViewportOptions::default())
    }

    #[test]
    fn test_end_to_end_scene_matches_board() {
        let theme = Theme::default();
        let mut board = Board::from_alive(8, [9, 10, 11, 27, 28, 36, 37]);
        board.tick();

        let ctl = controller_for(8);
        let mut surface = RecordingSurface::new(800.0, 800.0);
        let scene = render_frame(&mut surface, &ctl, &board, &theme, true).unwrap();

        let blocks: Vec<_> = scene.blocks().collect();
        assert_eq!(blocks.len(), 64);
        for (idx, block) in blocks.iter().enumerate() {
            let expected = theme.cell_color(board.cell_state(idx).unwrap());
            assert_eq!(block.color(), expected, "block {idx}");
        }
        assert_eq!(surface.fills().count(), 64);
    }

    #[test]
    fn test_block_layout_row_major() {
        let board = Board::new(3);
        let layout = GridLayout::new(50.0, 1.0, 3).unwrap();
        let scene = build_scene(&board, &layout, &Theme::default()).unwrap();

        let positions: Vec<_> = scene
            .blocks()
            .map(|b| b.transform.position())
            .collect();
        assert_eq!(positions[0], Vector2d::new(0.0, 0.0));
        assert_eq!(positions[1], Vector2d::new(51.0, 0.0));
        assert_eq!(positions[3], Vector2d::new(0.0, 51.0));
        assert_eq!(positions[8], Vector2d::new(102.0, 102.0));
        assert!(scene.blocks().all(|b| b.width() == 50.0 && b.height() == 50.0));
    }

    #[test]
    fn test_command_order() {
        let theme = Theme::default();
        let board = Board::new(2);
        let mut ctl = controller_for(2);
        ctl.pointer_down(Vector2d::new(0.0, 0.0));
        ctl.pointer_move(Vector2d::new(20.0, 30.0), &board);

        let mut surface = RecordingSurface::new(200.0, 200.0);
        render_frame(&mut surface, &ctl, &board, &theme, false).unwrap();
        let cmds = surface.commands();

        assert_eq!(cmds[0], DrawCommand::Clear(theme.background));
        assert_eq!(cmds[1], DrawCommand::Save);
        assert_eq!(cmds[2], DrawCommand::Translate(20.0, 30.0));
        assert!(matches!(cmds[3], DrawCommand::FillRect { .. }));
        assert_eq!(
            cmds[6],
            DrawCommand::FillRect {
                x: 51.0,
                y: 51.0,
                width: 50.0,
                height: 50.0,
                color: theme.dead,
            }
        );
        assert_eq!(cmds[7], DrawCommand::Restore);
        assert_eq!(cmds.len(), 8);
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_guide_drawn_after_restore() {
        let theme = Theme::default();
        let board = Board::new(1);
        let mut ctl = controller_for(1);
        ctl.pointer_down(Vector2d::new(5.0, 5.0));
        ctl.pointer_move(Vector2d::new(25.0, 5.0), &board);

        let mut surface = RecordingSurface::new(100.0, 100.0);
        render_frame(&mut surface, &ctl, &board, &theme, true).unwrap();
        let cmds = surface.commands();

        let restore = cmds.iter().position(|c| *c == DrawCommand::Restore).unwrap();
        assert_eq!(cmds[restore + 1..].last(), Some(&DrawCommand::Stroke));
        assert!(cmds.contains(&DrawCommand::LineTo(25.0, 5.0)));
    }

    #[test]
    fn test_zoom_scales_surface_when_enabled() {
        let theme = Theme::default();
        let board = Board::new(1);
        let layout = GridLayout::new(50.0, 1.0, 1).unwrap();

        let mut ctl = ViewportController::new(layout, ViewportOptions::default());
        ctl.wheel(-1.0);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        render_frame(&mut surface, &ctl, &board, &theme, false).unwrap();
        assert!(!surface.commands().iter().any(|c| matches!(c, DrawCommand::Scale(..))));

        let mut ctl = ViewportController::new(
            layout,
            ViewportOptions {
                apply_zoom: true,
                ..Default::default()
            },
        );
        ctl.wheel(-1.0);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        render_frame(&mut surface, &ctl, &board, &theme, false).unwrap();
        assert!(surface.commands().contains(&DrawCommand::Scale(2.0, 2.0)));
    }
}
