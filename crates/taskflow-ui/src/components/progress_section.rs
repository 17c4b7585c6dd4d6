use taskflow_shared::view::TaskStats;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ProgressSectionProps {
  pub stats: TaskStats
}

#[function_component(ProgressSection)]
pub fn progress_section(
  props: &ProgressSectionProps
) -> Html {
  let stats = props.stats;
  let width =
    format!("width:{}%;", stats.percentage);

  html! {
      <div class="progress-section">
          <div class="progress-head">
              <span class="progress-label">{ "✦ Progress" }</span>
              <span class="progress-value" data-testid="text-progress-percentage">
                  { format!("{}%", stats.percentage) }
              </span>
          </div>
          <div
              class="progress-track"
              role="progressbar"
              aria-valuemin="0"
              aria-valuemax="100"
              aria-valuenow={stats.percentage.to_string()}
              data-testid="progress-bar"
          >
              <div class="progress-fill" style={width.clone()}></div>
              <div class="progress-glow" style={width}></div>
          </div>
          <div class="progress-foot">
              <span data-testid="text-completed-count">
                  { format!("{} completed", stats.completed) }
              </span>
              <span data-testid="text-total-count">
                  { format!("{} total", stats.total) }
              </span>
          </div>
      </div>
  }
}
