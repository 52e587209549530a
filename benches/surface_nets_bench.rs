//! Benchmark comparing voxel_mesh_core's surface_nets against the
//! fast_surface_nets crate.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast_surface_nets::ndshape::{ConstShape, ConstShape3u32};
use fast_surface_nets::{surface_nets, SurfaceNetsBuffer};
use voxel_mesh_core::{sdf_conversion, surface_nets as my_surface_nets, CHUNK_SAMPLES, ExtractConfig, Volume};

/// Grid shape for fast_surface_nets (32³), matching our fixed chunk size.
type GridShape = ConstShape3u32<32, 32, 32>;

/// Build a sphere SDF volume for our implementation (i8 quantized).
fn sphere_volume(center: [f32; 3], radius: f32) -> Volume {
  let mut volume = Volume::new(1.0);
  for x in 0..CHUNK_SAMPLES {
    for y in 0..CHUNK_SAMPLES {
      for z in 0..CHUNK_SAMPLES {
        let dx = x as f32 - center[0];
        let dy = y as f32 - center[1];
        let dz = z as f32 - center[2];
        let distance = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
        let idx = volume.index(x, y, z);
        volume.sdf_mut()[idx] = sdf_conversion::to_storage(distance);
      }
    }
  }
  volume
}

/// Build a multi-sphere SDF volume (simulating lumpy terrain).
fn multi_sphere_volume(spheres: &[([f32; 3], f32)]) -> Volume {
  let mut volume = Volume::new(1.0);
  for x in 0..CHUNK_SAMPLES {
    for y in 0..CHUNK_SAMPLES {
      for z in 0..CHUNK_SAMPLES {
        let mut min_dist = f32::MAX;
        for (center, radius) in spheres {
          let dx = x as f32 - center[0];
          let dy = y as f32 - center[1];
          let dz = z as f32 - center[2];
          let dist = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
          min_dist = min_dist.min(dist);
        }
        let idx = volume.index(x, y, z);
        volume.sdf_mut()[idx] = sdf_conversion::to_storage(min_dist);
      }
    }
  }
  volume
}

/// Generate sphere SDF for fast_surface_nets (f32).
fn generate_sphere_sdf_f32(center: [f32; 3], radius: f32) -> [f32; GridShape::USIZE] {
  let mut sdf = [1.0f32; GridShape::USIZE];

  for i in 0u32..GridShape::SIZE {
    let [x, y, z] = GridShape::delinearize(i);
    let dx = x as f32 - center[0];
    let dy = y as f32 - center[1];
    let dz = z as f32 - center[2];
    let distance = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
    sdf[i as usize] = distance;
  }

  sdf
}

/// Benchmark our surface nets implementation.
fn bench_our_surface_nets(c: &mut Criterion) {
  let volume = sphere_volume([16.0, 16.0, 16.0], 12.0);
  let config = ExtractConfig::default();

  c.bench_function("voxel_mesh_core::surface_nets (32³ sphere)", |b| {
    b.iter(|| {
      let buffers = my_surface_nets::extract(black_box(&volume), &config);
      black_box(buffers)
    })
  });
}

/// Benchmark fast_surface_nets crate.
fn bench_fast_surface_nets(c: &mut Criterion) {
  let sdf = generate_sphere_sdf_f32([16.0, 16.0, 16.0], 12.0);

  c.bench_function("fast_surface_nets (32³ sphere)", |b| {
    b.iter(|| {
      let mut buffer = SurfaceNetsBuffer::default();
      surface_nets(black_box(&sdf), &GridShape {}, [0; 3], [31; 3], &mut buffer);
      black_box(buffer)
    })
  });
}

/// Direct comparison with varying sphere radii.
fn bench_comparison(c: &mut Criterion) {
  let mut group = c.benchmark_group("surface_nets_comparison");

  for radius in [8.0, 12.0, 14.0] {
    let center = [16.0, 16.0, 16.0];

    let volume = sphere_volume(center, radius);
    let config = ExtractConfig::default();
    let sdf_f32 = generate_sphere_sdf_f32(center, radius);

    group.bench_with_input(
      BenchmarkId::new("voxel_mesh_core", format!("r={}", radius)),
      &radius,
      |b, _| b.iter(|| my_surface_nets::extract(black_box(&volume), &config)),
    );

    group.bench_with_input(
      BenchmarkId::new("fast_surface_nets", format!("r={}", radius)),
      &radius,
      |b, _| {
        b.iter(|| {
          let mut buffer = SurfaceNetsBuffer::default();
          surface_nets(
            black_box(&sdf_f32),
            &GridShape {},
            [0; 3],
            [31; 3],
            &mut buffer,
          );
          black_box(buffer)
        })
      },
    );
  }

  group.finish();
}

/// Benchmark multiple overlapping spheres (simulating complex terrain).
fn bench_complex_sdf(c: &mut Criterion) {
  let mut group = c.benchmark_group("complex_sdf");

  let spheres = [
    ([10.0, 16.0, 16.0], 8.0),
    ([22.0, 16.0, 16.0], 8.0),
    ([16.0, 10.0, 16.0], 6.0),
    ([16.0, 22.0, 16.0], 6.0),
    ([16.0, 16.0, 16.0], 10.0),
  ];

  let volume = multi_sphere_volume(&spheres);
  let config = ExtractConfig::default();

  let mut sdf_f32 = [f32::MAX; GridShape::USIZE];
  for i in 0u32..GridShape::SIZE {
    let [x, y, z] = GridShape::delinearize(i);
    let mut min_dist = f32::MAX;
    for (center, radius) in &spheres {
      let dx = x as f32 - center[0];
      let dy = y as f32 - center[1];
      let dz = z as f32 - center[2];
      let dist = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
      min_dist = min_dist.min(dist);
    }
    sdf_f32[i as usize] = min_dist;
  }

  group.bench_function("voxel_mesh_core (5 spheres)", |b| {
    b.iter(|| my_surface_nets::extract(black_box(&volume), &config))
  });

  group.bench_function("fast_surface_nets (5 spheres)", |b| {
    b.iter(|| {
      let mut buffer = SurfaceNetsBuffer::default();
      surface_nets(
        black_box(&sdf_f32),
        &GridShape {},
        [0; 3],
        [31; 3],
        &mut buffer,
      );
      black_box(buffer)
    })
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_our_surface_nets,
  bench_fast_surface_nets,
  bench_comparison,
  bench_complex_sdf
);
criterion_main!(benches);
