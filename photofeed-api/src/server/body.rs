use crate::server::ServerError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// A JSON request body. Failing to decode it reports which body was expected,
/// e.g. `CreatePostBody` or `CommentBody`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| ServerError::InvalidBody {
                body: body_name::<T>(),
                rejection,
            })?;

        Ok(Self(body))
    }
}

fn body_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use crate::server::body::body_name;

    struct CommentBody;

    #[test]
    fn body_name_is_the_bare_type_name() {
        assert_eq!(body_name::<CommentBody>(), "CommentBody");
        assert_eq!(body_name::<u64>(), "u64");
    }
}
