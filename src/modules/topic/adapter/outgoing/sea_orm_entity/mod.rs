pub mod perfiles;
pub mod respuestas;
pub mod topicos;
