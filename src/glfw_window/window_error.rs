use thiserror::Error;

/// Window Errors represent things which can go wrong while creating and
/// manipulating GLFW windows.
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Failed to initialize GLFW")]
    UnableToInitGLFW(#[from] glfw::InitError),

    #[error("The GLFW Window could not be created with an OpenGL {0} context")]
    WindowCreateFailed(String),

    #[error("The Window's event reciever has already been taken")]
    EventReceiverLost,

    #[error("The OpenGL context's function pointers were already loaded")]
    ContextAlreadyLoaded,
}
