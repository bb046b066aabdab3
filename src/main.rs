mod app_log;
mod args;
mod interactive;
mod package_manager;
mod template;
mod template_variables;

use anyhow::Result;
use console::style;
use log::error;
use std::env;
use std::process;

use args::resolve_args;
use package_manager::{dev_instructions, PackageManager, FALLBACK_MANAGER, USER_AGENT_ENV};
use template::TemplateContext;
use template_variables::project_name::validate_project_name;
use template_variables::project_title::default_project_title;
use template_variables::ProjectDir;

fn main() -> Result<()> {
    app_log::init();
    let args = resolve_args();

    let (project_name, project_title) = match args.name {
        Some(name) => {
            // A name given on the command line is rejected outright, no
            // re-prompting.
            if let Err(reason) = validate_project_name(&name) {
                error!("Invalid project name \"{name}\": {reason}");
                process::exit(1);
            }
            let title = default_project_title(&name);
            (name, title)
        }
        None => {
            let name = interactive::project_name()?;
            let title = interactive::project_title(&default_project_title(&name))?;
            (name, title)
        }
    };

    generate(project_name, project_title)
}

/// Assemble the substitution context and expand the bundled template into
/// the new project directory.
fn generate(project_name: String, project_title: String) -> Result<()> {
    let user_agent = env::var(USER_AGENT_ENV).ok();
    let manager = PackageManager::from_user_agent(user_agent.as_deref())
        .map(|manager| manager.name)
        .unwrap_or_else(|| FALLBACK_MANAGER.to_string());
    let instructions = dev_instructions(&manager);

    let project_dir = ProjectDir::new(&project_name);
    let template_dir = template::locate_template_dir()?;

    let mut context = TemplateContext::new();
    context.insert("projectName".to_string(), project_name);
    context.insert("projectTitle".to_string(), project_title);
    context.insert(
        "devInstructions".to_string(),
        instructions
            .iter()
            .map(|line| format!("$ {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    println!(
        "🔧 {}",
        style(format!("Setting up project in {project_dir}..."))
            .bold()
            .yellow()
    );
    template::instantiate(&template_dir, project_dir.as_ref(), &context)?;

    println!(
        "✨ {}\n",
        style("All done! To get started, run:").bold().green()
    );
    println!("  cd {}", project_dir.display_quoted());
    for line in &instructions {
        println!("  {line}");
    }
    Ok(())
}
