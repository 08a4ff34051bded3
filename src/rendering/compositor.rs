//! Frame composition
//!
//! Once per tick: blit the committed layer onto the frame layer, paint the
//! live preview ribbon (never baked), advance every drip and paint its head,
//! then upload the finished frame into the canvas image.

use crate::core::settings::{EffectSettings, EffectTheme};
use crate::effect::drips::ActiveDrips;
use crate::effect::gesture::ActiveGesture;
use crate::effect::EffectRng;
use crate::geometry::ribbon;
use crate::rendering::layers::InkLayers;
use crate::rendering::surface::PaintSurface;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

/// Handle of the image the frame layer is uploaded into
#[derive(Resource)]
pub struct CanvasImage(pub Handle<Image>);

/// Marker for the full-window sprite showing the canvas image
#[derive(Component)]
pub struct CanvasSprite;

/// Create the ink layers, the canvas image, and the sprite showing it.
pub fn setup_canvas(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    windows: Query<&Window>,
    theme: Res<EffectTheme>,
) {
    let Ok(window) = windows.single() else {
        warn!("No primary window; canvas not created");
        return;
    };

    let mut layers = match InkLayers::new(
        window.physical_width(),
        window.physical_height(),
        window.scale_factor(),
        theme.background,
    ) {
        Ok(layers) => layers,
        Err(error) => {
            warn!("Could not allocate ink layers: {}", error);
            return;
        }
    };
    layers.frame.blit_from(&layers.committed);

    let handle = images.add(surface_image(&layers.frame));
    commands.spawn((
        Sprite {
            image: handle.clone(),
            custom_size: Some(Vec2::new(layers.frame.width(), layers.frame.height())),
            ..default()
        },
        Transform::default(),
        CanvasSprite,
    ));
    info!(
        "Canvas ready: {}x{} logical px at scale {}",
        layers.frame.width(),
        layers.frame.height(),
        layers.frame.scale()
    );
    commands.insert_resource(CanvasImage(handle));
    commands.insert_resource(layers);
}

/// One tick of the effect over explicit session state.
///
/// Plain function so tests can drive it frame by frame; the Bevy system
/// below is a thin wrapper.
pub fn compose_frame(
    layers: &mut InkLayers,
    gesture: &ActiveGesture,
    drips: &mut ActiveDrips,
    rng: &mut impl Rng,
    settings: &EffectSettings,
    ink: [u8; 4],
) {
    // Everything permanent first, including previously baked drip trails.
    layers.frame.blit_from(&layers.committed);

    // The live preview goes on the frame layer only; the stroke is baked
    // once, on release.
    if gesture.is_cutting() && gesture.points().len() > 2 {
        ribbon::paint_ribbon(gesture.points(), &mut layers.frame, ink, &settings.ribbon);
    }

    // Advance drips: trails bake into the committed layer, heads are drawn
    // on the frame layer, finished drips drop out of the collection.
    let surface_height = layers.committed.height();
    drips.0.retain_mut(|drip| {
        drip.advance(rng, &mut layers.committed, surface_height, &settings.drip, ink);
        drip.draw_head(&mut layers.frame, ink);
        !drip.is_done()
    });
}

/// System wrapper around [`compose_frame`].
pub fn compose_frame_system(
    mut layers: ResMut<InkLayers>,
    gesture: Res<ActiveGesture>,
    mut drips: ResMut<ActiveDrips>,
    mut rng: ResMut<EffectRng>,
    settings: Res<EffectSettings>,
    theme: Res<EffectTheme>,
) {
    compose_frame(
        &mut layers,
        &gesture,
        &mut drips,
        &mut rng.0,
        &settings,
        theme.ink,
    );
}

/// Upload the composed frame into the canvas image and keep the sprite sized
/// to the window.
pub fn upload_frame(
    layers: Res<InkLayers>,
    canvas: Res<CanvasImage>,
    mut images: ResMut<Assets<Image>>,
    mut sprites: Query<&mut Sprite, With<CanvasSprite>>,
) {
    images.insert(&canvas.0, surface_image(&layers.frame));
    for mut sprite in &mut sprites {
        sprite.custom_size = Some(Vec2::new(layers.frame.width(), layers.frame.height()));
    }
}

fn surface_image(surface: &PaintSurface) -> Image {
    Image::new(
        Extent3d {
            width: surface.physical_width(),
            height: surface.physical_height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        surface.data().to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
