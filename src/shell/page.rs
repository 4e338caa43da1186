use crate::encode::gif::GIF_FILE_NAME;
use crate::params::{ControlLimits, ControlRange};

/// Page title.
pub const PAGE_TITLE: &str = "3D Video / GIF via Rust";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
  body { font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 1rem; }
  input[type=range] { width: 100%; }
  .value { font-weight: bold; float: right; }
  #status { margin-top: 1rem; min-height: 1.5rem; }
  #status.error { color: #b00020; }
  #status.done { color: #1b7f3b; }
  #result { display: none; margin-top: 1rem; }
  #result img { display: block; max-width: 100%; margin-bottom: 1rem; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<p>This app generates an animated 3D view as a GIF.</p>

<form id="controls">
  <label>Number of frames <span class="value" id="num_frames-value"></span>
    <input type="range" name="num_frames" min="{{num_frames.min}}" max="{{num_frames.max}}" step="{{num_frames.step}}" value="{{num_frames.default}}">
  </label>
  <label>Elevation angle (degrees) <span class="value" id="elev-value"></span>
    <input type="range" name="elev" min="{{elev.min}}" max="{{elev.max}}" step="{{elev.step}}" value="{{elev.default}}">
  </label>
  <label>Azimuth change per frame (degrees) <span class="value" id="r_axis-value"></span>
    <input type="range" name="r_axis" min="{{r_axis.min}}" max="{{r_axis.max}}" step="{{r_axis.step}}" value="{{r_axis.default}}">
  </label>
  <label>GIF frame duration (ms) <span class="value" id="duration-value"></span>
    <input type="range" name="duration" min="{{duration.min}}" max="{{duration.max}}" step="{{duration.step}}" value="{{duration.default}}">
  </label>
  <p><button type="submit" id="generate">Generate GIF</button></p>
</form>

<div id="status"></div>
<div id="result">
  <img id="preview" alt="Animated 3D surface">
  <a id="download" download="{{file_name}}">Download GIF</a>
</div>

<script>
const form = document.getElementById("controls");
const status = document.getElementById("status");
const result = document.getElementById("result");
const button = document.getElementById("generate");
let currentUrl = null;

for (const input of form.querySelectorAll("input[type=range]")) {
  const out = document.getElementById(input.name + "-value");
  const show = () => { out.textContent = input.value; };
  input.addEventListener("input", show);
  show();
}

form.addEventListener("submit", async (ev) => {
  ev.preventDefault();
  const body = {};
  for (const input of form.querySelectorAll("input[type=range]")) {
    body[input.name] = Number(input.value);
  }
  button.disabled = true;
  status.className = "";
  status.textContent = "Rendering frames...";
  try {
    const resp = await fetch("/api/generate", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
    });
    if (!resp.ok) {
      let msg = resp.statusText;
      try { msg = (await resp.json()).error || msg; } catch (_) {}
      throw new Error(msg);
    }
    status.textContent = "Converting to GIF...";
    const blob = await resp.blob();
    if (currentUrl) URL.revokeObjectURL(currentUrl);
    currentUrl = URL.createObjectURL(blob);
    document.getElementById("preview").src = currentUrl;
    document.getElementById("download").href = currentUrl;
    result.style.display = "block";
    status.className = "done";
    status.textContent = "Done!";
  } catch (err) {
    status.className = "error";
    status.textContent = "Error: " + err.message;
  } finally {
    button.disabled = false;
  }
});
</script>
</body>
</html>
"#;

/// Render the slider page for `limits`.
pub fn render_index(limits: &ControlLimits) -> String {
    let mut html = PAGE_TEMPLATE
        .replace("{{title}}", PAGE_TITLE)
        .replace("{{file_name}}", GIF_FILE_NAME);
    for (name, range) in [
        ("num_frames", &limits.num_frames),
        ("elev", &limits.elev),
        ("r_axis", &limits.r_axis),
        ("duration", &limits.duration),
    ] {
        html = fill_range(html, name, range);
    }
    html
}

fn fill_range(html: String, name: &str, range: &ControlRange) -> String {
    html.replace(&format!("{{{{{name}.min}}}}"), &range.min.to_string())
        .replace(&format!("{{{{{name}.max}}}}"), &range.max.to_string())
        .replace(&format!("{{{{{name}.step}}}}"), &range.step.to_string())
        .replace(&format!("{{{{{name}.default}}}}"), &range.default.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/shell/page.rs"]
mod tests;
