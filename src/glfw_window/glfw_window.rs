use {
    crate::{
        gl_api::GlContext,
        glfw_window::{EventReceiver, WindowError},
    },
    glfw::Context,
    std::{fmt, sync::Arc},
};

/// The OpenGL context version requested when the window is created.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl Default for GlVersion {
    /// Tessellation stages need at least OpenGL 4.0. 4.1 is the newest core
    /// profile available everywhere, including macOS.
    fn default() -> Self {
        Self { major: 4, minor: 1 }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// All of the GLFW resources which are required for managing a single-windowed
/// OpenGL application.
pub struct GlfwWindow {
    /// The glfw library instance
    pub glfw: glfw::Glfw,

    /// The glfw window. Its OpenGL context is current on the thread which
    /// created it.
    pub window: glfw::Window,

    /// The event receiver which is typically consumed by the application's
    /// main loop.
    event_receiver: Option<EventReceiver>,

    gl_loaded: bool,
}

impl GlfwWindow {
    /// Initialize the GLFW library, create a window with a core profile
    /// OpenGL context, and make that context current.
    pub fn new(
        window_title: &str,
        version: GlVersion,
    ) -> Result<Self, WindowError> {
        let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(
            version.major,
            version.minor,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, event_receiver) = glfw
            .create_window(1366, 768, window_title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                WindowError::WindowCreateFailed(version.to_string())
            })?;

        window.make_current();
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);
        log::debug!("Created a window with an OpenGL {} context", version);

        Ok(Self {
            glfw,
            window,
            event_receiver: Some(event_receiver),
            gl_loaded: false,
        })
    }

    /// Load the OpenGL function pointers for this window's context.
    ///
    /// The `gl` crate keeps its function pointers in globals, so this may only
    /// be called once per window.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - every GPU object created through the returned context must be
    ///     deleted before this window is dropped
    ///   - the context must only be used on the thread which created the
    ///     window
    pub unsafe fn load_gl(&mut self) -> Result<Arc<GlContext>, WindowError> {
        if self.gl_loaded {
            return Err(WindowError::ContextAlreadyLoaded);
        }
        let window = &mut self.window;
        let context = GlContext::load_with(|symbol| {
            window.get_proc_address(symbol) as *const _
        });
        self.gl_loaded = true;
        Ok(Arc::new(context))
    }

    /// Take ownership of this window's event reciever. This receiver can then
    /// be used to flush window events.
    pub fn take_event_receiver(
        &mut self,
    ) -> Result<EventReceiver, WindowError> {
        self.event_receiver
            .take()
            .ok_or(WindowError::EventReceiverLost)
    }

    /// Poll GLFW for window events and flush out into an iterator.
    pub fn flush_window_events<'events>(
        &mut self,
        event_receiver: &'events EventReceiver,
    ) -> glfw::FlushedMessages<'events, (f64, glfw::WindowEvent)> {
        self.glfw.poll_events();
        glfw::flush_messages(event_receiver)
    }

    /// Present the frame which was just drawn.
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
