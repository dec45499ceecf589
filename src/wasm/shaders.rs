// GLSL ES 3.00 sources for both effects.

pub const BACKDROP_VS: &str = r#"#version 300 es
in vec3 position;

void main() {
    gl_Position = vec4(position, 1.0);
}
"#;

pub const BACKDROP_FS: &str = r#"#version 300 es
precision highp float;

uniform float time;
uniform vec2 resolution;
uniform vec2 mouse;
uniform vec2 mouseVelocity;
uniform float pulse;

out vec4 fragColor;

#define PI 3.14159265359

float noise(vec3 p) {
    vec3 i = floor(p);
    vec4 a = dot(i, vec3(1.0, 57.0, 21.0)) + vec4(0.0, 57.0, 21.0, 78.0);
    vec3 f = cos((p - i) * PI) * (-0.5) + 0.5;
    a = mix(sin(cos(a) * a), sin(cos(1.0 + a) * (1.0 + a)), f.x);
    a.xy = mix(a.xz, a.yw, f.y);
    return mix(a.x, a.y, f.z);
}

float fbm(vec3 p) {
    float v = 0.0;
    v += noise(p * 1.0) * 0.5;
    v += noise(p * 2.0) * 0.25;
    v += noise(p * 4.0) * 0.125;
    v += noise(p * 8.0) * 0.0625;
    return v;
}

void main() {
    vec2 uv = gl_FragCoord.xy / resolution.xy;

    vec2 toMouse = mouse - uv;
    float dist = length(toMouse);

    // ripple dragged along by pointer motion
    float moveWave = sin(dist * 20.0 - time * 2.0) * 0.05 * exp(-dist * 3.0) * length(mouseVelocity) * 2.0;
    uv += moveWave * toMouse;

    // ring expanding from the last press
    float pressWave = sin(dist * 15.0 - pulse * 5.0) * 0.05 * exp(-dist * 2.0 - pulse * 2.0) * pulse;
    uv += pressWave * normalize(toMouse + vec2(0.001));

    vec3 p = vec3(uv * 5.0, time * 0.1);
    p.x += fbm(p + vec3(0.0, 0.0, time * 0.1)) * 2.0;
    p.y += fbm(p + vec3(0.0, 0.0, time * 0.15)) * 2.0;

    float n = fbm(p * 0.6);
    float n2 = fbm(p * 0.3 + vec3(mouse * 0.5, time * 0.05));
    float n3 = fbm(p * 0.9 + vec3(sin(time * 0.2), cos(time * 0.2), 0.0));

    vec3 blue = vec3(0.0, 0.5, 1.0);
    vec3 magenta = vec3(1.0, 0.1, 0.8);
    vec3 cyan = vec3(0.0, 1.0, 0.7);

    vec3 color = mix(blue, magenta, n);
    color = mix(color, cyan, n2 * n3);
    color += vec3(pow(n3, 4.0)) * 0.5;
    color *= 0.8 + 0.5 * n;

    color += vec3(0.2, 0.5, 1.0) * (1.0 - smoothstep(0.0, 0.3, dist)) * 0.5;
    color += vec3(1.0, 0.3, 0.7) * pulse * exp(-dist * 3.0) * 2.0;

    float gridX = smoothstep(0.95, 0.99, sin(uv.x * 50.0 + time) * 0.5 + 0.5) * 0.5;
    float gridY = smoothstep(0.95, 0.99, sin(uv.y * 50.0 + time * 0.7) * 0.5 + 0.5) * 0.5;
    color += vec3(gridX + gridY) * 0.2;

    float vignette = 1.0 - smoothstep(0.4, 1.4, length(uv - 0.5) * 1.5);
    color *= vignette;

    fragColor = vec4(color, 1.0);
}
"#;

pub const PARTICLE_VS: &str = r#"#version 300 es
in vec3 position;

uniform mat4 uProjectionMatrix;
uniform mat4 uModelViewMatrix;
uniform float uPointSize;
uniform float uViewportHeight;

void main() {
    vec4 mvPosition = uModelViewMatrix * vec4(position, 1.0);
    gl_Position = uProjectionMatrix * mvPosition;
    // world-space size, shrinking with distance
    gl_PointSize = uPointSize * (uViewportHeight * 0.5) / -mvPosition.z;
}
"#;

pub const PARTICLE_FS: &str = r#"#version 300 es
precision mediump float;

out vec4 fragColor;

void main() {
    fragColor = vec4(1.0, 1.0, 1.0, 0.8);
}
"#;

pub const CUBE_VS: &str = r#"#version 300 es
in vec4 aVertexPosition;
in vec4 aVertexColor;
in vec2 aTextureCoord;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

out lowp vec4 vColor;
out highp vec2 vTextureCoord;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vColor = aVertexColor;
    vTextureCoord = aTextureCoord;
}
"#;

pub const CUBE_FS: &str = r#"#version 300 es
precision mediump float;

in lowp vec4 vColor;
in highp vec2 vTextureCoord;

uniform sampler2D uSampler;
uniform bool uUseTexture;

out vec4 fragColor;

void main() {
    if (uUseTexture) {
        vec4 texel = texture(uSampler, vTextureCoord);
        fragColor = vec4(vColor.rgb * (1.0 - texel.a) + texel.rgb, 0.8);
    } else {
        fragColor = vec4(vColor.rgb, 0.8);
    }
}
"#;
