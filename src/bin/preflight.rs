use vertex_site_api::infra::config;
use vertex_site_api::ContentStore;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Validates the bundled content and reports which contact-endpoint\n\
         credentials are present:\n\
           RECAPTCHA_SECRET_KEY, EMAIL_API_KEY, CONTACT_FROM_ADDRESS, CONTACT_RECIPIENT\n"
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Load validates JSON shape plus slug/id uniqueness; any failure here
    // is exactly the failure the server would die with at startup.
    let store = ContentStore::load()
        .map_err(|e| anyhow::anyhow!("bundled content failed validation: {}", e))?;

    println!("> Preflight:");
    println!("  services: {}", store.services().len());
    println!("  case studies: {}", store.case_studies().len());
    println!("  blog posts: {}", store.blog_posts().len());
    println!("  testimonials: {}", store.testimonials().len());
    println!("  team members: {}", store.team().len());
    println!("  company: {}", store.company().info.name);

    // Cross-links are tolerated dangling at runtime; still worth surfacing.
    for case_study in store.case_studies() {
        let resolves = store.services().iter().any(|s| s.slug == case_study.service);
        if !resolves {
            eprintln!(
                "  Warning: case study '{}' references unknown service '{}'.",
                case_study.slug, case_study.service
            );
        }
    }
    for testimonial in store.testimonials() {
        if !(1..=5).contains(&testimonial.rating) {
            eprintln!(
                "  Warning: testimonial '{}' has out-of-range rating {}.",
                testimonial.id, testimonial.rating
            );
        }
    }

    let secret = config::recaptcha_secret_key().is_some();
    let api_key = config::email_api_key().is_some();
    let from = config::contact_from_address().is_some();
    let recipient = config::contact_recipient().is_some();
    println!("  RECAPTCHA_SECRET_KEY: {}", if secret { "set" } else { "MISSING" });
    println!("  EMAIL_API_KEY: {}", if api_key { "set" } else { "MISSING" });
    println!("  CONTACT_FROM_ADDRESS: {}", if from { "set" } else { "MISSING" });
    println!("  CONTACT_RECIPIENT: {}", if recipient { "set" } else { "MISSING" });
    if !(secret && api_key && from && recipient) {
        eprintln!("  Warning: contact endpoints will answer 400/500 until the missing values are set.");
    }

    println!("> Preflight OK.");
    Ok(())
}
