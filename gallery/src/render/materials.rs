//! Unlit materials for fills, procedural textures, and baked wall images.

use std::collections::HashMap;

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::BatchKey;
use crate::geometry::Surface;
use crate::raster::{Canvas, TextureSet};

/// Uploads a canvas. `repeat` selects a wrapping sampler for tiled UVs.
pub fn canvas_image(canvas: &Canvas, repeat: bool) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: canvas.width(),
            height: canvas.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        canvas.pixels().to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    if repeat {
        image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            ..ImageSamplerDescriptor::nearest()
        });
    }
    image
}

fn unlit(texture: Option<Handle<Image>>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: texture,
        unlit: true,
        cull_mode: None,
        double_sided: true,
        ..default()
    }
}

/// Shared material handles, created once at startup.
#[derive(Resource, Clone, Debug, Default)]
pub struct GalleryMaterials {
    pub fill: Handle<StandardMaterial>,
    pub textures: HashMap<BatchKey, Handle<StandardMaterial>>,
    /// Baked wall image per artwork, indexed like the catalog.
    pub flat_images: Vec<Handle<StandardMaterial>>,
}

impl GalleryMaterials {
    pub fn new(
        textures: &TextureSet,
        images: &mut Assets<Image>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        let fill = materials.add(unlit(None));
        let textures = TextureSet::ids()
            .map(|id| {
                let image = images.add(canvas_image(textures.get(id), true));
                (
                    BatchKey::of(Surface::Texture(id)),
                    materials.add(unlit(Some(image))),
                )
            })
            .collect();
        Self {
            fill,
            textures,
            flat_images: Vec::new(),
        }
    }

    pub fn add_flat_image(
        &mut self,
        canvas: &Canvas,
        images: &mut Assets<Image>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Handle<StandardMaterial> {
        let image = images.add(canvas_image(canvas, false));
        let handle = materials.add(unlit(Some(image)));
        self.flat_images.push(handle.clone());
        handle
    }

    pub fn for_batch(&self, key: BatchKey) -> Handle<StandardMaterial> {
        match key {
            BatchKey::Fill => self.fill.clone(),
            key => self.textures.get(&key).cloned().unwrap_or_else(|| self.fill.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_becomes_a_matching_image() {
        let canvas = Canvas::new(4, 2, 128);
        let image = canvas_image(&canvas, true);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert_eq!(image.data.len(), 32);
        assert!(matches!(image.sampler, ImageSampler::Descriptor(_)));
        assert!(matches!(canvas_image(&canvas, false).sampler, ImageSampler::Default));
    }

    #[test]
    fn every_texture_gets_a_material() {
        let mut images = Assets::<Image>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let set = TextureSet::generate(8);
        let mut gallery = GalleryMaterials::new(&set, &mut images, &mut materials);
        assert_eq!(gallery.textures.len(), 6);
        assert_ne!(gallery.for_batch(BatchKey::Waves), gallery.fill);
        assert_eq!(gallery.for_batch(BatchKey::Fill), gallery.fill);

        gallery.add_flat_image(&Canvas::new(2, 2, 0), &mut images, &mut materials);
        assert_eq!(gallery.flat_images.len(), 1);
        assert_eq!(images.len(), 7);
    }
}
