//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Boxes Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[scene]
# ring_radius = 2.0          # 0.5-10.0
# box_scale = [0.3, 0.6, 0.6]
# background_scale = 20.0    # 1.0-50.0
# field_of_view = 60.0       # 10.0-120.0
# initial_zoom = 600         # -960..1200

# Idle spin in degrees per millisecond; mode is "sphere" or "plane".
[orbit.central]
# axis = [0.0, 1.0, 0.0]
# speed = 0.05
# mode = "sphere"

[orbit.ring]
# axis = [0.0, 0.0, 1.0]
# speed = 0.005
# mode = "sphere"

[orbit.camera]
# axis = [0.0, 1.0, 0.0]
# speed = 0.0
# mode = "plane"

[reflections]
# enabled = false
# main_resolution = 512      # 16-4096
# ring_resolution = 256      # 16-4096
# stagger = 3                # 1-16

[assets]
# directory = "assets"
# texture_size = 256         # 16-4096
# environment_size = 1024    # 16-4096
# base_shader = "basic.wgsl"
# reflection_uniform = "env"
# noise_seed = 0

[materials.colors]
# baseColor = "#b8a36e"
# specularColor = "#ffffff"
# tint = "#cfe8ff"

[materials.floats]
# reflectionFactor = 0.6
# fresnelPower = 3.0
# noiseScale = 1.0

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
