use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }
}

#[derive(Bundle)]
pub struct OverlayBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub z_index: GlobalZIndex,
    pub overlay: LoadingOverlay,
}

impl OverlayBundle {
    pub fn new(background: Color) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: BackgroundColor(background),
            z_index: GlobalZIndex(1),
            overlay: LoadingOverlay,
        }
    }
}
