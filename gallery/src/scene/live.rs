//! Per-artwork geometry rebuilt as the animation phase moves, plus the
//! visibility switch for artworks that draw alone.

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::art::{Artwork, ArtworkId, LiveContext};
use crate::render::{batch_geometry, BatchKey, GalleryMaterials};
use crate::scene::gallery::GalleryStatic;
use crate::scene::{Gallery, Navigation};

/// One material batch of one artwork's live geometry.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveGeometry {
    pub artwork: ArtworkId,
    pub batch: BatchKey,
}

/// What the live entities were last built and shown for.
#[derive(Debug, Default)]
pub struct LiveCache {
    shown_for: Option<(bool, Option<ArtworkId>)>,
    built: Vec<Option<LiveContext>>,
}

/// Spawns one entity per material the artwork's live geometry uses.
pub(crate) fn spawn_live_geometry(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    palette: &GalleryMaterials,
    id: ArtworkId,
    artwork: &Artwork,
) {
    let geometry = artwork.live_geometry(LiveContext {
        phase: 0,
        active: true,
    });
    for (batch, buffers) in batch_geometry(&geometry) {
        commands.spawn((
            Mesh3d(meshes.add(buffers.into_mesh())),
            MeshMaterial3d(palette.for_batch(batch)),
            Transform::IDENTITY,
            // Bounds change as the geometry animates.
            NoFrustumCulling,
            LiveGeometry { artwork: id, batch },
        ));
    }
}

pub fn live_plugin(app: &mut App) {
    app.add_systems(Update, update_live_geometry);
}

/// Per artwork, the inputs to rebuild with, or `None` when its current
/// meshes are still right or it is hidden.
fn stale_inputs(
    artworks: &[Artwork],
    built: &[Option<LiveContext>],
    phase: u32,
    active: Option<ArtworkId>,
    exclusive: bool,
) -> Vec<Option<LiveContext>> {
    artworks
        .iter()
        .enumerate()
        .map(|(id, artwork)| {
            let ctx = artwork.kind.live_inputs(LiveContext {
                phase,
                active: active == Some(id),
            });
            let shown = !exclusive || active == Some(id);
            let current = built.get(id).copied().flatten() == Some(ctx);
            (shown && !current).then_some(ctx)
        })
        .collect()
}

/// Rebuilds an artwork's meshes only when the inputs its geometry reads
/// change, and switches visibility when exclusive drawing starts or stops.
pub fn update_live_geometry(
    gallery: Res<Gallery>,
    navigation: Res<Navigation>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut live: Query<(&LiveGeometry, &Mesh3d, &mut Visibility), Without<GalleryStatic>>,
    mut statics: Query<&mut Visibility, With<GalleryStatic>>,
    mut cache: Local<LiveCache>,
) {
    let state = navigation.controller.state();
    let exclusive = navigation.exclusive();
    let active = state.active_artwork;
    let artworks = gallery.layout.artworks();
    let shown = |id: ArtworkId| !exclusive || active == Some(id);

    cache.built.resize(artworks.len(), None);
    let stale = stale_inputs(artworks, &cache.built, state.animation_phase, active, exclusive);

    let visibility_changed = cache.shown_for != Some((exclusive, active));
    if !visibility_changed && stale.iter().all(Option::is_none) {
        return;
    }
    let exclusive_changed = cache.shown_for.map(|(was, _)| was) != Some(exclusive);
    cache.shown_for = Some((exclusive, active));

    let mut rebuilt: Vec<Option<_>> = vec![None; artworks.len()];
    for (tag, mesh, mut visibility) in &mut live {
        let (Some(artwork), Some(&ctx)) = (artworks.get(tag.artwork), stale.get(tag.artwork))
        else {
            continue;
        };
        if visibility_changed {
            visibility.set_if_neq(if shown(tag.artwork) {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            });
        }
        let Some(ctx) = ctx else {
            continue;
        };
        let batches = rebuilt[tag.artwork]
            .get_or_insert_with(|| batch_geometry(&artwork.live_geometry(ctx)));
        let buffers = batches.remove(&tag.batch).unwrap_or_default();
        meshes.insert(mesh.0.id(), buffers.into_mesh());
    }
    for (built, ctx) in cache.built.iter_mut().zip(stale) {
        if ctx.is_some() {
            *built = ctx;
        }
    }

    if exclusive_changed {
        let visibility = if exclusive {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        for mut v in &mut statics {
            v.set_if_neq(visibility);
        }
        debug!("gallery: exclusive drawing {}", if exclusive { "on" } else { "off" });
    }
}
