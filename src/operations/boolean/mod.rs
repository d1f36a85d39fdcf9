mod subtract;

pub use subtract::Subtract;
