//! Default TOML config template with inline documentation comments.

/// Default config file content. Every value is commented out so the
/// built-in defaults apply until the user opts in.
pub(crate) fn default_config_toml() -> String {
    r##"# Globe backdrop configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[camera]
# fov_degrees = 75.0       # 10-150
# near = 0.1
# far = 1000.0
# distance = 3.0           # 1.5-100

[globe]
# radius = 1.0
# width_segments = 64      # 3-512
# height_segments = 64     # 2-512
# texture = "https://threejs.org/examples/textures/planets/earth_atmos_2048.jpg"
# base_color = "#ffffff"
# specular = "#222222"
# shininess = 1000.0       # 0-10000
# emissive = "#001122"
# emissive_intensity = 0.1
# rotation_speed = 0.002   # radians per frame

[wireframe]
# enabled = true
# radius = 1.01
# width_segments = 24
# height_segments = 24
# color = "#00aaff"
# rotation_speed_x = 0.001
# rotation_speed_y = 0.003
# opacity = { base = 0.15, amplitude = 0.05, frequency = 1.5, wave = "sin" }

[particles]
# enabled = true
# count = 100              # 1-10000
# spawn_radius = 1.1
# spawn_spread = 0.2
# point_size = 0.015
# opacity = 0.4            # 0.0-1.0
# bright_color = [0.0, 0.8, 1.0]
# dim_color = [0.0, 0.5, 0.8]
# bright_probability = 0.2 # 0.0-1.0
# orbit_speed = 0.005      # radians per frame
# breathing_radius = 1.1
# breathing_amplitude = 0.05
# breathing_rate = 0.8     # radians per second
# phase_step = 0.1
# seed = 42                # omit for a fresh layout every run

[lighting.ambient]
# color = "#404040"
# intensity = 0.4

[lighting.directional]
# color = "#ffffff"
# intensity = 1.0
# position = [5.0, 3.0, 5.0]

# Exactly two point lights. Uncomment both tables to override.
# [[lighting.points]]
# color = "#00aaff"
# position = [2.0, 2.0, 2.0]
# distance = 15.0
# intensity = { base = 0.3, amplitude = 0.1, frequency = 1.0, wave = "sin" }
#
# [[lighting.points]]
# color = "#00ffff"
# position = [-2.0, -2.0, 2.0]
# distance = 12.0
# intensity = { base = 0.2, amplitude = 0.08, frequency = 1.3, wave = "cos" }

[pointer]
# enabled = true
# offset_scale = 0.2
# max_offset = 0.3
# zoom_range = 0.2

[animation]
# time_source = "elapsed"  # "elapsed" | "wall_clock"
# pulse_rate = 2.0

[window]
# mode = "windowed"        # "windowed" | "backdrop"
# title = "Globe"
# width = 1280             # 200-7680
# height = 800             # 200-4320
# decorations = true
# transparent = true

[performance]
# vsync = true
# fps_log_interval = 5.0   # seconds, 0 disables

[logging]
# level = "info"           # trace | debug | info | warn | error
"##
    .to_string()
}
