use yew::{
  Html,
  function_component,
  html
};

const PLACEHOLDER_ROWS: usize = 3;

#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
  html! {
      <div class="skeleton-stack" aria-busy="true">
          {
              for (0..PLACEHOLDER_ROWS).map(|index| html! {
                  <div key={index.to_string()} class="card task-card skeleton">
                      <div class="skeleton-dot"></div>
                      <div class="skeleton-line"></div>
                      <div class="skeleton-button"></div>
                  </div>
              })
          }
      </div>
  }
}
