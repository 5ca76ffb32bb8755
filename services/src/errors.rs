use std::error::Error;

pub trait UnknownError {
    fn unknown<E: Error + Sync + Send + 'static>(e: E, context: Option<&'static str>) -> Self;
}

#[macro_export]
macro_rules! impl_unknown_error_trait {
    ($struct: ident) => {
        impl $crate::errors::UnknownError for $struct {
            fn unknown<E: std::error::Error + Sync + Send + 'static>(
                e: E,
                context: Option<&'static str>,
            ) -> Self {
                if let Some(ctx) = context {
                    Self::Unknown(anyhow::anyhow!(e).context(ctx))
                } else {
                    Self::Unknown(anyhow::anyhow!(e))
                }
            }
        }
    };
}
