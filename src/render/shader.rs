//! WGSL for the particle point sprites.
//!
//! Each particle is an instanced camera-facing quad, `point_size` world
//! units across, expanded in view space so sprites shrink with distance.
//! Color fades toward the black background with exponential-squared fog.

pub const POINT_SHADER: &str = r#"
struct Uniforms {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,
    point_size: f32,
    fog_density: f32,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) view_depth: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) particle_pos: vec3<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );
    let quad_pos = quad_vertices[vertex_index];

    var view_pos = uniforms.view * uniforms.model * vec4<f32>(particle_pos, 1.0);
    view_pos.x += quad_pos.x * uniforms.point_size * 0.5;
    view_pos.y += quad_pos.y * uniforms.point_size * 0.5;

    var out: VertexOutput;
    out.clip_position = uniforms.proj * view_pos;
    out.uv = quad_pos;
    out.view_depth = -view_pos.z;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if length(in.uv) > 1.0 {
        discard;
    }
    let d = uniforms.fog_density * in.view_depth;
    let fog = clamp(1.0 - exp(-d * d), 0.0, 1.0);
    let rgb = mix(uniforms.color.rgb, vec3<f32>(0.0), fog);
    return vec4<f32>(rgb, uniforms.color.a);
}
"#;
