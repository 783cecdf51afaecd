use crate::core::{ContentRect, DrawableItem, PRICE_AXIS_BANDS};
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, RenderStyle, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current geometry into a backend-agnostic frame.
    ///
    /// Layer order: outline, price grid and labels, then per candle its
    /// month divider, date label, wick and body. An empty series still
    /// yields the outline.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let style = self.config.render_style;
        let content = self.viewport.content_rect();
        let mut frame = RenderFrame::new(content);
        frame.items = self.geometry.items.clone();
        frame.price_range = self.geometry.price_range;
        frame.price_ticks = self.price_ticks.clone();

        if content.is_empty() {
            return frame;
        }

        push_outline(&mut frame, content, style);
        self.push_price_axis(&mut frame, content, style);
        for item in &self.geometry.items {
            push_candle(&mut frame, item, content, style);
        }
        frame
    }

    fn push_price_axis(&self, frame: &mut RenderFrame, content: ContentRect, style: RenderStyle) {
        let ticks = self.price_ticks.as_slice();
        if ticks.is_empty() {
            return;
        }

        let band_height = content.height() / PRICE_AXIS_BANDS as f64;
        let pad = style.price_label_padding_px;
        let label_x = content.left + pad;
        let decimals = self.config.price_label_decimals as usize;
        let last = ticks.len() - 1;

        for (band, value) in ticks.iter().enumerate() {
            let y = if band == 0 {
                content.top + style.font_size_px + pad
            } else if band == last {
                content.bottom - pad
            } else {
                let grid_y = content.top + band_height * band as f64;
                frame.lines.push(LinePrimitive::new(
                    content.left,
                    grid_y,
                    content.right,
                    grid_y,
                    style.grid_line_width_px,
                    style.grid_color,
                ));
                grid_y - pad
            };
            frame.texts.push(TextPrimitive::new(
                format!("{value:.decimals$}"),
                label_x,
                y,
                style.font_size_px,
                style.text_color,
                TextHAlign::Left,
            ));
        }
    }
}

fn push_outline(frame: &mut RenderFrame, content: ContentRect, style: RenderStyle) {
    let corners = [
        (content.left, content.top),
        (content.right, content.top),
        (content.right, content.bottom),
        (content.left, content.bottom),
    ];
    for (i, &(x1, y1)) in corners.iter().enumerate() {
        let (x2, y2) = corners[(i + 1) % corners.len()];
        frame.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            style.outline_width_px,
            style.outline_color,
        ));
    }
}

fn push_candle(
    frame: &mut RenderFrame,
    item: &DrawableItem,
    content: ContentRect,
    style: RenderStyle,
) {
    let on_screen = item.center_x >= content.left && item.center_x <= content.right;
    if let Some(label) = item.date_label.as_deref().filter(|_| on_screen) {
        frame.lines.push(LinePrimitive::new(
            item.center_x,
            content.top,
            item.center_x,
            content.bottom,
            style.grid_line_width_px,
            style.grid_color,
        ));
        frame.texts.push(TextPrimitive::new(
            label,
            item.center_x,
            content.bottom + style.font_size_px + style.date_label_padding_px,
            style.font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }

    let color = style.candle_color(item.direction);
    for rect in [item.wick, item.body] {
        // Partly visible slots must not spill into the axis margins.
        let left = rect.left.max(content.left);
        let right = rect.right.min(content.right);
        if right <= left {
            continue;
        }
        frame.rects.push(RectPrimitive::new(
            left,
            rect.top,
            right - left,
            rect.height(),
            color,
        ));
    }
}
