use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas shared by every view
pub struct LayoutInfo {
    pub nav_area: Rect,
    pub body_area: Rect,
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Calculate the fixed chrome (nav bar, legend, status bar) around the body
pub fn calculate_layout(size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar (borders + tabs)
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Hotkey legend
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    LayoutInfo {
        nav_area: chunks[0],
        body_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas_tile_the_screen() {
        let size = Rect::new(0, 0, 120, 40);
        let info = calculate_layout(size);

        assert_eq!(info.nav_area.height, 3);
        assert_eq!(info.legend_area.height, 1);
        assert_eq!(info.status_area.height, 3);
        assert_eq!(
            info.nav_area.height
                + info.body_area.height
                + info.legend_area.height
                + info.status_area.height,
            40
        );
    }

    #[test]
    fn test_body_absorbs_extra_height() {
        let small = calculate_layout(Rect::new(0, 0, 80, 20));
        let large = calculate_layout(Rect::new(0, 0, 80, 50));
        assert!(large.body_area.height > small.body_area.height);
    }
}
