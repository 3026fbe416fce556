use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlContextAttributes, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject, Window,
};

use super::dom;
use crate::config::BackgroundConfig;
use crate::error::{Error, Result};
use crate::scene::{self, Camera, Spin, Viewport};

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 a_position;
uniform mat4 u_projection;
uniform mat4 u_model_view;
uniform float u_size;
uniform float u_scale;

void main() {
    vec4 mv = u_model_view * vec4(a_position, 1.0);
    gl_Position = u_projection * mv;
    gl_PointSize = u_size * (u_scale / -mv.z);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec3 u_color;
uniform float u_opacity;
out vec4 out_color;

void main() {
    out_color = vec4(u_color, u_opacity);
}
"#;

struct Uniforms {
    projection: Option<WebGlUniformLocation>,
    model_view: Option<WebGlUniformLocation>,
    size: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
}

/// GL state plus everything that changes between frames.
struct Scene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    uniforms: Uniforms,
    vao: WebGlVertexArrayObject,
    count: i32,
    camera: Camera,
    spin: Spin,
    spin_step: (f32, f32),
    viewport: Viewport,
    point_size: f32,
    color: [f32; 3],
    opacity: f32,
}

impl Scene {
    fn new(canvas: HtmlCanvasElement, config: &BackgroundConfig, viewport: Viewport) -> Result<Self> {
        let attrs = WebGlContextAttributes::new();
        attrs.set_alpha(true);
        attrs.set_antialias(true);
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &attrs)?
            .ok_or(Error::WebGlUnavailable)?
            .dyn_into()
            .map_err(|_| Error::WebGlUnavailable)?;

        let vert = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let frag = compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vert, &frag)?;

        let positions = scene::particle_positions(config.particle_count, config.spread, || {
            js_sys::Math::random() as f32
        });
        let vao = upload_points(&gl, &program, &positions)?;

        let uniforms = Uniforms {
            projection: gl.get_uniform_location(&program, "u_projection"),
            model_view: gl.get_uniform_location(&program, "u_model_view"),
            size: gl.get_uniform_location(&program, "u_size"),
            scale: gl.get_uniform_location(&program, "u_scale"),
            color: gl.get_uniform_location(&program, "u_color"),
            opacity: gl.get_uniform_location(&program, "u_opacity"),
        };

        gl.enable(GL::BLEND);
        gl.blend_func_separate(
            GL::SRC_ALPHA,
            GL::ONE_MINUS_SRC_ALPHA,
            GL::ONE,
            GL::ONE_MINUS_SRC_ALPHA,
        );

        let mut scene = Scene {
            gl,
            canvas,
            program,
            uniforms,
            vao,
            count: config.particle_count as i32,
            camera: Camera::from_config(config, viewport.aspect()),
            spin: Spin::default(),
            spin_step: (config.spin_x, config.spin_y),
            viewport,
            point_size: config.point_size,
            color: config.rgb()?,
            opacity: config.opacity,
        };
        scene.resize(viewport);
        Ok(scene)
    }

    fn resize(&mut self, viewport: Viewport) {
        let (width, height) = viewport.buffer_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        dom::set_styles(
            &self.canvas,
            &[
                ("width", format!("{}px", viewport.width)),
                ("height", format!("{}px", viewport.height)),
            ],
        );
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.camera.aspect = viewport.aspect();
        self.viewport = viewport;
    }

    fn draw(&mut self) {
        let (dx, dy) = self.spin_step;
        self.spin.advance(dx, dy);

        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        let u = &self.uniforms;
        let model_view = self.camera.view() * self.spin.model();
        gl.uniform_matrix4fv_with_f32_array(
            u.projection.as_ref(),
            false,
            &self.camera.projection().to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(u.model_view.as_ref(), false, &model_view.to_cols_array());
        gl.uniform1f(
            u.size.as_ref(),
            self.point_size * self.viewport.pixel_ratio as f32,
        );
        gl.uniform1f(u.scale.as_ref(), scene::point_scale(&self.viewport));
        gl.uniform3f(u.color.as_ref(), self.color[0], self.color[1], self.color[2]);
        gl.uniform1f(u.opacity.as_ref(), self.opacity);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::POINTS, 0, self.count);
        gl.bind_vertex_array(None);
    }
}

/// Handle to the running particle background.
///
/// The frame loop and the resize listener live as long as this value;
/// [`Background::stop`] (or dropping it) tears both down.
pub struct Background {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    running: Rc<Cell<bool>>,
    frame: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    resize: Option<EventListener>,
}

impl Background {
    /// Build the point cloud on `canvas` and start the render loop.
    pub fn start(window: &Window, canvas: HtmlCanvasElement, config: &BackgroundConfig) -> Result<Self> {
        let scene = Rc::new(RefCell::new(Scene::new(canvas, config, dom::viewport(window))?));

        // Resize canvas to fit window
        let resize = {
            let scene = scene.clone();
            let win = window.clone();
            EventListener::new(window, "resize", move |_| {
                let viewport = dom::viewport(&win);
                scene.borrow_mut().resize(viewport);
                log::debug!("background resized to {}x{}", viewport.width, viewport.height);
            })
        };

        // Animation loop
        // `f` holds the animation-frame closure so that it can keep calling
        // `request_animation_frame` recursively. Storing it inside an `Option`
        // allows creating the `Closure` first and then obtaining a reference
        // to it from within itself.
        let running = Rc::new(Cell::new(true));
        let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        {
            let scene = scene.clone();
            let running = running.clone();
            let frame = frame.clone();
            let window = window.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame.set(None);
                if !running.get() {
                    return;
                }
                scene.borrow_mut().draw();

                // schedule next
                if let Some(tick) = f.borrow().as_ref() {
                    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                        Ok(id) => frame.set(Some(id)),
                        Err(e) => {
                            log::error!("requestAnimationFrame failed: {:?}", e);
                            running.set(false);
                        }
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        let id = window.request_animation_frame(
            g.borrow()
                .as_ref()
                .ok_or_else(|| Error::Js("frame callback missing".into()))?
                .as_ref()
                .unchecked_ref(),
        )?;
        frame.set(Some(id));

        log::info!("particle background started with {} points", config.particle_count);
        Ok(Background {
            window: window.clone(),
            scene,
            running,
            frame,
            tick: g,
            resize: Some(resize),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Drawing-buffer size currently applied to the canvas.
    pub fn buffer_size(&self) -> (u32, u32) {
        let scene = self.scene.borrow();
        (scene.canvas.width(), scene.canvas.height())
    }

    /// Cancel the pending frame and release the loop. Idempotent.
    pub fn stop(&mut self) {
        if let Some(id) = self.frame.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        self.resize.take();
        // the closure captures `tick` itself; clearing it breaks the cycle
        self.tick.borrow_mut().take();
        if self.running.replace(false) {
            log::info!("particle background stopped");
        }
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.stop();
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| Error::Shader("unable to create shader object".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(Error::Shader(log))
    }
}

fn link_program(gl: &GL, vert: &WebGlShader, frag: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| Error::Program("unable to create program object".into()))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(Error::Program(log))
    }
}

fn upload_points(gl: &GL, program: &WebGlProgram, positions: &[f32]) -> Result<WebGlVertexArrayObject> {
    let location = gl.get_attrib_location(program, "a_position");
    if location < 0 {
        return Err(Error::Program("a_position attribute not found".into()));
    }

    let vao = gl
        .create_vertex_array()
        .ok_or_else(|| Error::Program("unable to create vertex array".into()))?;
    let buffer = gl
        .create_buffer()
        .ok_or_else(|| Error::Program("unable to create buffer".into()))?;

    gl.bind_vertex_array(Some(&vao));
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let data = js_sys::Float32Array::from(positions);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location as u32);
    gl.vertex_attrib_pointer_with_i32(location as u32, 3, GL::FLOAT, false, 0, 0);
    gl.bind_vertex_array(None);

    Ok(vao)
}
