use dotenvy::dotenv;

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-env-changed=API_BASE_URL");

  // the .env file is optional, the API defaults to the site's own origin
  dotenv().ok();

  let api_base = std::env::var("API_BASE_URL").unwrap_or_default();
  println!("cargo::rustc-env=API_BASE_URL={}", api_base.trim_end_matches('/'));
}
