//! Renders a small showcase scene to `demo.png`.

use glint_tracer::{
    render, Attenuation, Camera, Color, Cuboid, Cylinder, DirectionalLight, Hemisphere, Material,
    Plane, PointLight, RectAreaLight, RenderConfig, ShadingMode, Sphere, ToneMapper, Vec3,
};
use std::sync::Arc;

fn gold() -> Arc<Material> {
    Arc::new(Material::new(
        Color::new(0.75164, 0.60648, 0.22648),
        Color::new(0.628_281, 0.555_802, 0.366_065),
        Color::new(0.24725, 0.1995, 0.0745),
        51.2,
        0.9,
        0.0,
        1.0,
    ))
}

fn glass() -> Arc<Material> {
    Arc::new(Material::new(
        Color::new(0.05, 0.05, 0.08),
        Color::splat(0.9),
        Color::new(0.02, 0.02, 0.03),
        96.0,
        0.1,
        0.85,
        1.5,
    ))
}

fn box_corners(center: Vec3, half: Vec3, yaw: f32) -> [Vec3; 8] {
    let (sin, cos) = yaw.sin_cos();
    let rotate = |v: Vec3| Vec3::new(cos * v.x + sin * v.z, v.y, -sin * v.x + cos * v.z);

    let mut corners = [Vec3::ZERO; 8];
    let mut index = 0;
    for sx in [-1.0f32, 1.0] {
        for sy in [-1.0f32, 1.0] {
            for sz in [-1.0f32, 1.0] {
                corners[index] = center + rotate(Vec3::new(sx * half.x, sy * half.y, sz * half.z));
                index += 1;
            }
        }
    }
    corners
}

fn build_scene() -> glint_tracer::Scene {
    let mut scene = glint_tracer::Scene::new(Color::splat(0.4));

    let floor = Arc::new(Material::matte(Color::splat(0.6)));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -10.0, -100.0),
        Vec3::Y,
        Vec3::X * 120.0,
        Vec3::new(0.0, 0.0, -120.0),
        floor,
    ));

    scene.add_primitive(Sphere::new(Vec3::new(-22.0, 2.0, -95.0), 12.0, gold()));
    scene.add_primitive(Sphere::new(Vec3::new(8.0, 0.0, -70.0), 10.0, glass()));

    let red = Arc::new(Material::new(
        Color::new(0.8, 0.15, 0.12),
        Color::splat(0.4),
        Color::new(0.08, 0.015, 0.012),
        32.0,
        0.05,
        0.0,
        1.0,
    ));
    scene.add_primitive(Cuboid::new(
        box_corners(Vec3::new(30.0, -3.0, -100.0), Vec3::splat(3.5), 0.6),
        7.0,
        7.0,
        7.0,
        red,
    ));

    let steel = Arc::new(Material::new(
        Color::splat(0.55),
        Color::splat(0.77),
        Color::splat(0.23),
        76.8,
        0.25,
        0.0,
        1.0,
    ));
    scene.add_primitive(Cylinder::new(
        Vec3::new(-2.0, -10.0, -110.0),
        Vec3::new(-2.0, 8.0, -110.0),
        5.0,
        0.5,
        steel,
    ));

    let jade = Arc::new(Material::new(
        Color::new(0.54, 0.89, 0.63),
        Color::splat(0.316_228),
        Color::new(0.135, 0.2225, 0.1575),
        12.8,
        0.0,
        0.0,
        1.0,
    ));
    scene.add_primitive(Hemisphere::new(
        Vec3::new(14.0, -10.0, -115.0),
        Vec3::Y,
        8.0,
        1.5,
        jade,
    ));

    scene.add_light(PointLight::new(
        Vec3::new(-30.0, 40.0, -40.0),
        Attenuation::new(1.0, 0.0045, 0.000_075),
        1.4,
        Color::ONE,
    ));
    scene.add_light(DirectionalLight::new(
        Vec3::new(0.3, -1.0, -0.4),
        0.35,
        Color::new(1.0, 0.96, 0.88),
    ));
    scene.add_area_light(RectAreaLight::new(
        Vec3::new(20.0, 35.0, -80.0),
        Vec3::new(44.0, 35.0, -80.0),
        Vec3::new(20.0, 35.0, -104.0),
        Attenuation::new(1.0, 0.0045, 0.000_075),
        1.1,
        Color::new(0.95, 0.95, 1.0),
    ));

    scene
}

fn main() {
    env_logger::init();

    let config = RenderConfig {
        width: 1280,
        height: 720,
        shading_mode: ShadingMode::BlinnPhong,
        tone_mapper: ToneMapper::Uncharted2,
    };

    let camera = Camera::orbiting(
        Vec3::new(0.0, -2.0, -95.0),
        Vec3::Y,
        55.0,
        0.25,
        0.15,
        85.0,
        config.width,
        config.height,
    );

    let scene = build_scene();
    let frame = render(&scene, &camera, &config);

    if let Err(err) = frame.save_png("demo.png") {
        eprintln!("failed to write demo.png: {err}");
        std::process::exit(1);
    }
    println!("wrote demo.png");
}
