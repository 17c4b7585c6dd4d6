use gloo::net::http::{
  Request,
  RequestBuilder
};
use serde::{
  Serialize,
  de::DeserializeOwned
};
use taskflow_shared::routes::{
  ApiRoute,
  HttpMethod
};
use taskflow_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{method} {url} failed: {source}")]
  Network {
    method: &'static str,
    url:    String,
    #[source]
    source: gloo::net::Error
  },
  #[error(
    "{method} {url} returned status \
     {status}"
  )]
  Status {
    method: &'static str,
    url:    String,
    status: u16
  },
  #[error(
    "failed to encode request body: \
     {0}"
  )]
  Encode(#[source] serde_json::Error),
  #[error(
    "failed to decode response from \
     {url}: {source}"
  )]
  Decode {
    url:    String,
    #[source]
    source: serde_json::Error
  }
}

fn request_for(
  method: HttpMethod,
  url: &str
) -> RequestBuilder {
  match method {
    | HttpMethod::Get => {
      Request::get(url)
    }
    | HttpMethod::Post => {
      Request::post(url)
    }
    | HttpMethod::Patch => {
      Request::patch(url)
    }
    | HttpMethod::Delete => {
      Request::delete(url)
    }
  }
}

/// Sends `route` with an optional JSON
/// body and returns the raw response
/// text. Any non-2xx status is an error.
async fn send<B>(
  base: &str,
  route: &ApiRoute,
  body: Option<&B>
) -> Result<String, ApiError>
where
  B: Serialize + ?Sized
{
  let method = route.method().as_str();
  let url = route.url(base);
  let network = |source| {
    ApiError::Network {
      method,
      url: url.clone(),
      source
    }
  };

  tracing::debug!(method, %url, "sending request");

  let builder =
    request_for(route.method(), &url)
      .header(
        "Accept",
        "application/json"
      );
  let response = match body {
    | Some(body) => {
      let payload =
        serde_json::to_string(body)
          .map_err(ApiError::Encode)?;
      builder
        .header(
          "Content-Type",
          "application/json"
        )
        .body(payload)
        .map_err(network)?
        .send()
        .await
    }
    | None => builder.send().await
  }
  .map_err(network)?;

  if !response.ok() {
    return Err(ApiError::Status {
      method,
      url: url.clone(),
      status: response.status()
    });
  }

  response.text().await.map_err(network)
}

fn decode<R>(
  url: String,
  text: &str
) -> Result<R, ApiError>
where
  R: DeserializeOwned
{
  serde_json::from_str(text).map_err(
    |source| {
      ApiError::Decode {
        url,
        source
      }
    }
  )
}

pub async fn list_tasks(
  base: &str
) -> Result<Vec<TaskDto>, ApiError> {
  let route = ApiRoute::ListTasks;
  let text =
    send::<()>(base, &route, None)
      .await?;
  decode(route.url(base), &text)
}

pub async fn create_task(
  base: &str,
  create: &TaskCreate
) -> Result<TaskDto, ApiError> {
  let route = ApiRoute::CreateTask;
  let text =
    send(base, &route, Some(create))
      .await?;
  decode(route.url(base), &text)
}

pub async fn update_task(
  base: &str,
  id: &TaskId,
  patch: &TaskPatch
) -> Result<TaskDto, ApiError> {
  let route =
    ApiRoute::UpdateTask(id.clone());
  let text =
    send(base, &route, Some(patch))
      .await?;
  decode(route.url(base), &text)
}

pub async fn delete_task(
  base: &str,
  id: &TaskId
) -> Result<(), ApiError> {
  let route =
    ApiRoute::DeleteTask(id.clone());
  send::<()>(base, &route, None)
    .await
    .map(|_| ())
}
