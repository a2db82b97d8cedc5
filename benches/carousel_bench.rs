use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orbis::carousel::{
    nearest_index, CarouselBuilder, GeometryHandle, MaterialHandle,
    SlotResources, TextureHandle,
};
use orbis::gallery::{AssetRef, GalleryItem};
use orbis::options::{CarouselOptions, RotationOptions};
use orbis::rotation::RotationState;
use orbis::scene::SceneManager;
use orbis::GalleryError;

/// Backend that hands out handles without allocating anything.
#[derive(Default)]
struct NullResources {
    next: u64,
}

impl NullResources {
    fn next(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl SlotResources for NullResources {
    fn create_geometry(&mut self, _: f32, _: f32) -> GeometryHandle {
        GeometryHandle(self.next())
    }

    fn load_texture(
        &mut self,
        _: &AssetRef,
    ) -> Result<TextureHandle, GalleryError> {
        Ok(TextureHandle(self.next()))
    }

    fn solid_texture(&mut self, _: [u8; 4]) -> TextureHandle {
        TextureHandle(self.next())
    }

    fn create_material(&mut self, _: TextureHandle) -> MaterialHandle {
        MaterialHandle(self.next())
    }

    fn release_geometry(&mut self, _: GeometryHandle) {}

    fn release_material(&mut self, _: MaterialHandle) {}

    fn release_texture(&mut self, _: TextureHandle) {}
}

fn items(n: usize) -> Vec<GalleryItem> {
    (0..n)
        .map(|i| GalleryItem::new(format!("{i}.png"), format!("#{i}"), "c"))
        .collect()
}

fn rebuild_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_rebuild");

    for count in [8, 32, 128] {
        let items = items(count);
        let selection: Vec<usize> = (0..count).collect();
        let mut builder = CarouselBuilder::new(&CarouselOptions::default());
        let mut resources = NullResources::default();

        group.bench_function(format!("{count}_items"), |b| {
            b.iter(|| {
                black_box(
                    builder.build(&items, &selection, &mut resources).len(),
                )
            })
        });
    }
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let items = items(64);
    let selection: Vec<usize> = (0..64).collect();
    let mut builder = CarouselBuilder::new(&CarouselOptions::default());
    let mut resources = NullResources::default();
    let _ = builder.build(&items, &selection, &mut resources);
    let mut rotation = RotationState::new(&RotationOptions::default());

    c.bench_function("advance_and_transform_64", |b| {
        b.iter(|| {
            rotation.advance();
            builder.update_transforms(SceneManager::carousel_group(
                rotation.rotation(),
            ));
            black_box(nearest_index(rotation.rotation(), 64))
        })
    });
}

criterion_group!(benches, rebuild_benchmark, frame_benchmark);
criterion_main!(benches);
