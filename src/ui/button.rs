use macroquad::prelude::*;

/// Button UI component with hover detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    text_color: Color,
    radius: f32,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: WHITE,
            text_color: BLACK,
            radius: 15.0,
        }
    }

    /// Override fill and label colors (builder pattern)
    pub fn with_colors(mut self, color: Color, text_color: Color) -> Self {
        self.color = color;
        self.text_color = text_color;
        self
    }

    /// Square corners instead of rounded ones
    pub fn square(mut self) -> Self {
        self.radius = 0.0;
        self
    }

    /// Check if a point lies on the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button, brightening slightly under the cursor
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Color::new(self.color.r * 0.85, self.color.g * 0.85, self.color.b * 0.85, 1.0)
        } else {
            self.color
        };

        let r = self.radius.min(self.height / 2.0);
        if r > 0.0 {
            // rounded rect from two bars and four corner discs
            draw_rectangle(self.x + r, self.y, self.width - 2.0 * r, self.height, color);
            draw_rectangle(self.x, self.y + r, self.width, self.height - 2.0 * r, color);
            for (cx, cy) in [
                (self.x + r, self.y + r),
                (self.x + self.width - r, self.y + r),
                (self.x + r, self.y + self.height - r),
                (self.x + self.width - r, self.y + self.height - r),
            ] {
                draw_circle(cx, cy, r, color);
            }
        } else {
            draw_rectangle(self.x, self.y, self.width, self.height, color);
        }

        let text_size = measure_text(&self.text, None, 28, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            28.0,
            self.text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_includes_edges() {
        let button = Button::new(20.0, 20.0, 100.0, 30.0, "Back");
        assert!(button.is_hovered((20.0, 20.0)));
        assert!(button.is_hovered((120.0, 50.0)));
        assert!(!button.is_hovered((121.0, 30.0)));
        assert!(!button.is_hovered((60.0, 19.0)));
    }
}
