pub mod gradient;
pub mod latent;
pub mod mix;

pub use gradient::{__path_handle_gradient, __path_handle_gradient_png};
pub use gradient::{handle_gradient, handle_gradient_png, GradientQuery, GradientResponse};
pub use latent::{__path_handle_decode, __path_handle_latent};
pub use latent::{handle_decode, handle_latent, DecodeRequest, DecodeResponse, LatentResponse};
pub use mix::{handle_mix, MixResponse, __path_handle_mix};
