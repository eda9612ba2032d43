// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that slides its content up past its own top edge.
//!
//! Layout is untouched: the wrapper occupies the same space as the content.
//! Only drawing is translated, by `hidden_fraction` of the content height, and
//! clipped to everything below the top edge, so a banner anchored to the top
//! of the window appears to slide in from above. While any part of the content
//! is hidden the wrapper swallows input, since the drawn position no longer
//! matches the layout.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

/// Content translated upward by a fraction of its height.
pub struct Slide<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    hidden_fraction: f32,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    /// Wraps `content`; `hidden_fraction` is clamped to `0.0..=1.0`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        hidden_fraction: f32,
    ) -> Self {
        Self {
            content: content.into(),
            hidden_fraction: hidden_fraction.clamp(0.0, 1.0),
        }
    }

    fn is_sliding(&self) -> bool {
        self.hidden_fraction > 0.0
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if !self.is_sliding() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
            return;
        }

        let bounds = layout.bounds();
        let offset = slide_offset(bounds.height, self.hidden_fraction);
        let clip = Rectangle {
            y: bounds.y,
            height: (viewport.y + viewport.height - bounds.y).max(0.0),
            ..*viewport
        };

        renderer.with_layer(clip, |renderer| {
            renderer.with_translation(Vector::new(0.0, -offset), |renderer| {
                self.content.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    style,
                    layout,
                    mouse::Cursor::Unavailable,
                    viewport,
                );
            });
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.is_sliding() {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.is_sliding() {
            return mouse::Interaction::Idle;
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        if self.is_sliding() {
            return None;
        }

        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a slide wrapper.
pub fn slide<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    hidden_fraction: f32,
) -> Slide<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Slide::new(content, hidden_fraction)
}

/// Vertical distance the content is moved up, in pixels.
fn slide_offset(height: f32, hidden_fraction: f32) -> f32 {
    height * hidden_fraction.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_hidden_moves_by_full_height() {
        assert_eq!(slide_offset(120.0, 1.0), 120.0);
    }

    #[test]
    fn settled_content_does_not_move() {
        assert_eq!(slide_offset(120.0, 0.0), 0.0);
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(slide_offset(80.0, 3.0), 80.0);
        assert_eq!(slide_offset(80.0, -1.0), 0.0);
    }
}
