use {
    gl::types::{GLsizei, GLsizeiptr, GLuint},
    std::{ffi::c_void, mem::size_of},
};

/// Two triangles covering the middle of the screen. Each vertex is a
/// position followed by a texture coordinate.
#[rustfmt::skip]
const VERTICES: [f32; 24] = [
    -0.5, -0.5,   0.0, 0.0,
     0.5, -0.5,   2.0, 0.0,
     0.5,  0.5,   2.0, 2.0,

    -0.5, -0.5,   0.0, 0.0,
     0.5,  0.5,   2.0, 2.0,
    -0.5,  0.5,   0.0, 2.0,
];

/// A vertex array and buffer holding the quad.
pub struct Quad {
    vao: GLuint,
    vbo: GLuint,
}

impl Quad {
    /// Create the quad and leave its vertex array bound.
    ///
    /// # Safety
    ///
    /// Unsafe because the OpenGL function pointers must be loaded and the
    /// context must be current.
    pub unsafe fn new() -> Self {
        let mut vao = 0;
        let mut vbo = 0;
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (VERTICES.len() * size_of::<f32>()) as GLsizeiptr,
            VERTICES.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );

        let stride = (4 * size_of::<f32>()) as GLsizei;
        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(
            0,
            2,
            gl::FLOAT,
            gl::FALSE,
            stride,
            std::ptr::null(),
        );
        gl::EnableVertexAttribArray(1);
        gl::VertexAttribPointer(
            1,
            2,
            gl::FLOAT,
            gl::FALSE,
            stride,
            (2 * size_of::<f32>()) as *const c_void,
        );

        Self { vao, vbo }
    }

    /// # Safety
    ///
    /// Unsafe because a program must be bound.
    pub unsafe fn draw(&self) {
        gl::BindVertexArray(self.vao);
        gl::DrawArrays(gl::TRIANGLES, 0, (VERTICES.len() / 4) as GLsizei);
    }
}

impl Drop for Quad {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
