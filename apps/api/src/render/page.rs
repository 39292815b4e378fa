//! Page renderer — a pure function from `(ContentRecord, BusinessInputs)`
//! to the final self-contained HTML document.
//!
//! No I/O, no randomness, no external calls. The copyright year is an
//! explicit parameter so the function stays deterministic under test; only
//! the pipeline reads the wall clock. Section order is a fixed contract:
//! head, nav, hero, about, services, features, contact, footer.

use crate::content::models::{BusinessInputs, ContentRecord};
use crate::render::sections::{derive_email, expand_feature_items, expand_service_cards};

/// Renders the complete document. Byte-identical output for identical
/// inputs and year.
pub fn render(content: &ContentRecord, inputs: &BusinessInputs, year: i32) -> String {
    PAGE_TEMPLATE
        .replace("{page_title}", &content.page_title)
        .replace("{meta_description}", &content.meta_description)
        .replace("{keywords}", &inputs.keywords)
        .replace("{main_headline}", &content.main_headline)
        .replace("{subheadline}", &content.subheadline)
        .replace("{cta_text}", &content.cta_text)
        .replace("{about_text}", &content.about_text)
        .replace("{service_cards}", &expand_service_cards(&content.services))
        .replace("{feature_items}", &expand_feature_items(&content.features))
        .replace("{contact_email}", &derive_email(&inputs.business_name))
        .replace("{industry_lower}", &inputs.industry.to_lowercase())
        .replace("{year}", &year.to_string())
        // One token, four sections: logo, about heading, features heading, footer.
        .replace("{business_name}", &inputs.business_name)
}

/// Fixed document skeleton: structural markup, embedded stylesheet, and
/// embedded interaction script (smooth scrolling, local-only contact form
/// acknowledgment, scroll-reveal for service cards). `{placeholder}` tokens
/// are substituted by `render`.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title}</title>
    <meta name="description" content="{meta_description}">
    <meta name="keywords" content="{keywords}">

    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css" rel="stylesheet">

    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body { font-family: 'Inter', sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }

        header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 1rem 0; position: sticky; top: 0; z-index: 100; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        nav { display: flex; justify-content: space-between; align-items: center; }
        .logo { font-size: 1.5rem; font-weight: 700; text-decoration: none; color: white; }
        .nav-links { display: flex; list-style: none; gap: 2rem; }
        .nav-links a { color: white; text-decoration: none; transition: opacity 0.3s; }
        .nav-links a:hover { opacity: 0.8; }

        .hero { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 80px 0; text-align: center; }
        .hero h1 { font-size: 3rem; font-weight: 700; margin-bottom: 1rem; animation: slideUp 1s ease-out; }
        .hero p { font-size: 1.25rem; margin-bottom: 2rem; animation: slideUp 1s ease-out 0.3s; }

        .cta-button { display: inline-block; background: #ff6b6b; color: white; padding: 15px 30px; text-decoration: none; border-radius: 50px; font-weight: 600; transition: all 0.3s; animation: slideUp 1s ease-out 0.6s; }
        .cta-button:hover { background: #ff5252; transform: translateY(-2px); box-shadow: 0 5px 15px rgba(255, 107, 107, 0.4); }

        .section { padding: 80px 0; }
        .section:nth-child(even) { background: #f8f9fa; }
        .section h2 { text-align: center; font-size: 2.5rem; margin-bottom: 3rem; color: #2c3e50; }

        .about-content { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
        .about-text { font-size: 1.1rem; line-height: 1.8; }
        .about-image { text-align: center; font-size: 8rem; color: #667eea; opacity: 0.3; }

        .services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; margin-top: 2rem; }
        .service-card { background: white; padding: 2rem; border-radius: 10px; text-align: center; box-shadow: 0 5px 15px rgba(0,0,0,0.1); transition: transform 0.3s; }
        .service-card:hover { transform: translateY(-5px); }
        .service-icon { font-size: 3rem; color: #667eea; margin-bottom: 1rem; }
        .service-card h3 { font-size: 1.5rem; margin-bottom: 1rem; color: #2c3e50; }

        .features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 2rem; margin-top: 2rem; }
        .feature-item { display: flex; align-items: center; gap: 1rem; }
        .feature-icon { font-size: 2rem; color: #667eea; min-width: 60px; }
        .feature-text h4 { font-size: 1.2rem; margin-bottom: 0.5rem; color: #2c3e50; }

        .contact-content { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
        .contact-info { background: white; padding: 2rem; border-radius: 10px; box-shadow: 0 5px 15px rgba(0,0,0,0.1); }
        .contact-item { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
        .contact-icon { font-size: 1.5rem; color: #667eea; min-width: 40px; }

        .contact-form { background: white; padding: 2rem; border-radius: 10px; box-shadow: 0 5px 15px rgba(0,0,0,0.1); }
        .form-group { margin-bottom: 1.5rem; }
        .form-group label { display: block; margin-bottom: 0.5rem; font-weight: 500; color: #2c3e50; }
        .form-group input, .form-group textarea { width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 5px; font-size: 1rem; transition: border-color 0.3s; }
        .form-group input:focus, .form-group textarea:focus { outline: none; border-color: #667eea; }

        .submit-btn { background: #667eea; color: white; padding: 12px 30px; border: none; border-radius: 5px; font-size: 1rem; cursor: pointer; transition: background 0.3s; }
        .submit-btn:hover { background: #5a6fd8; }

        footer { background: #2c3e50; color: white; padding: 3rem 0 1rem; text-align: center; }
        .footer-content { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 2rem; margin-bottom: 2rem; }
        .footer-section h3 { margin-bottom: 1rem; color: #667eea; }
        .footer-section ul { list-style: none; }
        .footer-section ul li { margin-bottom: 0.5rem; }
        .footer-section ul li a { color: #bdc3c7; text-decoration: none; transition: color 0.3s; }
        .footer-section ul li a:hover { color: white; }
        .footer-bottom { border-top: 1px solid #34495e; padding-top: 1rem; color: #bdc3c7; }

        @keyframes slideUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: translateY(0); } }

        @media (max-width: 768px) {
            .nav-links { display: none; }
            .hero h1 { font-size: 2rem; }
            .about-content, .contact-content { grid-template-columns: 1fr; }
            .services-grid { grid-template-columns: 1fr; }
        }
    </style>
</head>
<body>
    <header>
        <nav class="container">
            <a href="#" class="logo">{business_name}</a>
            <ul class="nav-links">
                <li><a href="#home">Home</a></li>
                <li><a href="#about">About</a></li>
                <li><a href="#services">Services</a></li>
                <li><a href="#contact">Contact</a></li>
            </ul>
        </nav>
    </header>

    <section class="hero" id="home">
        <div class="container">
            <h1>{main_headline}</h1>
            <p>{subheadline}</p>
            <a href="#contact" class="cta-button">{cta_text}</a>
        </div>
    </section>

    <section class="section" id="about">
        <div class="container">
            <h2>About {business_name}</h2>
            <div class="about-content">
                <div class="about-text">
                    <p>{about_text}</p>
                </div>
                <div class="about-image">
                    <i class="fas fa-building"></i>
                </div>
            </div>
        </div>
    </section>

    <section class="section" id="services">
        <div class="container">
            <h2>Our Services</h2>
            <div class="services-grid">
                {service_cards}
            </div>
        </div>
    </section>

    <section class="section">
        <div class="container">
            <h2>Why Choose {business_name}?</h2>
            <div class="features-grid">
                {feature_items}
            </div>
        </div>
    </section>

    <section class="section" id="contact">
        <div class="container">
            <h2>Get In Touch</h2>
            <div class="contact-content">
                <div class="contact-info">
                    <h3>Contact Information</h3>
                    <div class="contact-item">
                        <i class="fas fa-map-marker-alt contact-icon"></i>
                        <div>
                            <h4>Address</h4>
                            <p>123 Business Street<br>City, State 12345</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-phone contact-icon"></i>
                        <div>
                            <h4>Phone</h4>
                            <p>(555) 123-4567</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-envelope contact-icon"></i>
                        <div>
                            <h4>Email</h4>
                            <p>{contact_email}</p>
                        </div>
                    </div>
                </div>
                <form class="contact-form">
                    <div class="form-group">
                        <label for="name">Name</label>
                        <input type="text" id="name" name="name" required>
                    </div>
                    <div class="form-group">
                        <label for="email">Email</label>
                        <input type="email" id="email" name="email" required>
                    </div>
                    <div class="form-group">
                        <label for="message">Message</label>
                        <textarea id="message" name="message" rows="5" required></textarea>
                    </div>
                    <button type="submit" class="submit-btn">Send Message</button>
                </form>
            </div>
        </div>
    </section>

    <footer>
        <div class="container">
            <div class="footer-content">
                <div class="footer-section">
                    <h3>{business_name}</h3>
                    <p>Your trusted partner in {industry_lower}. We're committed to delivering exceptional results.</p>
                </div>
                <div class="footer-section">
                    <h3>Quick Links</h3>
                    <ul>
                        <li><a href="#home">Home</a></li>
                        <li><a href="#about">About</a></li>
                        <li><a href="#services">Services</a></li>
                        <li><a href="#contact">Contact</a></li>
                    </ul>
                </div>
                <div class="footer-section">
                    <h3>Contact Info</h3>
                    <ul>
                        <li><i class="fas fa-phone"></i> (555) 123-4567</li>
                        <li><i class="fas fa-envelope"></i> {contact_email}</li>
                        <li><i class="fas fa-map-marker-alt"></i> 123 Business Street, City</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>&copy; {year} {business_name}. All rights reserved.</p>
            </div>
        </div>
    </footer>

    <script>
        document.querySelectorAll('a[href^="#"]').forEach(anchor => {
            anchor.addEventListener('click', function (e) {
                e.preventDefault();
                document.querySelector(this.getAttribute('href')).scrollIntoView({
                    behavior: 'smooth'
                });
            });
        });

        document.querySelector('.contact-form').addEventListener('submit', function(e) {
            e.preventDefault();
            alert('Thank you for your message! We will get back to you soon.');
            this.reset();
        });

        const observer = new IntersectionObserver((entries) => {
            entries.forEach(entry => {
                if (entry.isIntersecting) {
                    entry.target.style.opacity = '1';
                    entry.target.style.transform = 'translateY(0)';
                }
            });
        }, {threshold: 0.1});

        document.querySelectorAll('.service-card').forEach(card => {
            card.style.opacity = '0';
            card.style.transform = 'translateY(30px)';
            card.style.transition = 'all 0.6s ease-out';
            observer.observe(card);
        });
    </script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::SectionEntry;
    use crate::content::provider::TemplateProvider;

    const FIXED_YEAR: i32 = 2024;

    fn make_inputs() -> BusinessInputs {
        BusinessInputs {
            business_name: "Acme Co".to_string(),
            industry: "Consulting".to_string(),
            audience: "SMBs".to_string(),
            keywords: "consulting,strategy".to_string(),
            tone: "Professional".to_string(),
        }
    }

    fn make_record(inputs: &BusinessInputs) -> ContentRecord {
        TemplateProvider.fill(inputs)
    }

    #[test]
    fn test_render_is_pure_with_fixed_year() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let a = render(&record, &inputs, FIXED_YEAR);
        let b = render(&record, &inputs, FIXED_YEAR);
        assert_eq!(a, b);
    }

    #[test]
    fn test_head_metadata_substitution() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        assert!(html.contains("<title>Acme Co - Leading Consulting Solutions</title>"));
        assert!(html.contains(r#"<meta name="keywords" content="consulting,strategy">"#));
    }

    #[test]
    fn test_year_appears_in_copyright_line() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        assert!(html.contains("&copy; 2024 Acme Co. All rights reserved."));
        // A different year changes the document
        let html_later = render(&record, &inputs, 2025);
        assert!(html_later.contains("&copy; 2025 Acme Co."));
        assert_ne!(html, html_later);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        let hero = html.find(r#"class="hero""#).unwrap();
        let about = html.find(r##"id="about""##).unwrap();
        let services = html.find(r##"id="services""##).unwrap();
        let features = html.find(r#"class="features-grid""#).unwrap();
        let contact = html.find(r##"id="contact""##).unwrap();
        let footer = html.find("<footer>").unwrap();
        assert!(hero < about && about < services);
        assert!(services < features && features < contact && contact < footer);
    }

    #[test]
    fn test_derived_email_in_contact_and_footer() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        assert_eq!(html.matches("info@acmeco.com").count(), 2);
    }

    #[test]
    fn test_footer_lowercases_industry() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        assert!(html.contains("Your trusted partner in consulting."));
    }

    #[test]
    fn test_template_record_yields_four_service_cards() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        assert_eq!(html.matches(r#"<div class="service-card">"#).count(), 4);
        assert_eq!(html.matches(r#"<div class="feature-item">"#).count(), 4);
    }

    #[test]
    fn test_renderer_tolerates_empty_lists() {
        let inputs = make_inputs();
        let mut record = make_record(&inputs);
        record.services.clear();
        record.features.clear();
        let html = render(&record, &inputs, FIXED_YEAR);
        assert_eq!(html.matches(r#"<div class="service-card">"#).count(), 0);
        // Section shells remain; only the cards disappear.
        assert!(html.contains("Our Services"));
    }

    #[test]
    fn test_renderer_tolerates_oversized_lists() {
        let inputs = make_inputs();
        let mut record = make_record(&inputs);
        record.services.push(SectionEntry {
            title: "Fifth Service".to_string(),
            description: "Cycles back to the first icon.".to_string(),
        });
        let html = render(&record, &inputs, FIXED_YEAR);
        assert_eq!(html.matches(r#"<div class="service-card">"#).count(), 5);
    }

    #[test]
    fn test_no_unsubstituted_placeholders_remain() {
        let inputs = make_inputs();
        let record = make_record(&inputs);
        let html = render(&record, &inputs, FIXED_YEAR);
        for token in [
            "{page_title}",
            "{meta_description}",
            "{keywords}",
            "{business_name}",
            "{main_headline}",
            "{subheadline}",
            "{cta_text}",
            "{about_text}",
            "{service_cards}",
            "{feature_items}",
            "{contact_email}",
            "{industry_lower}",
            "{year}",
        ] {
            assert!(!html.contains(token), "unsubstituted token {token}");
        }
    }
}
