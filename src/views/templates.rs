//! Handlebars sources for every fragment the app returns.

pub const PRICE_LINES: &str = r#"<div class="price">
  <span class="price-primary">{{primary}}</span>
  {{#each secondary}}<span class="price-secondary">{{this}}</span>{{/each}}
</div>"#;

pub const FLIGHT_CARD: &str = r#"<article class="result-card flight-card" data-id="{{id}}">
  <div class="flight-route">
    <span class="airport">{{from}}</span>
    <span class="route-line">{{duration}} · {{stops}}</span>
    <span class="airport">{{to}}</span>
  </div>
  <div class="flight-meta">
    <span class="airline">{{airline}}</span>
    <span class="flight-number">{{flight_number}}</span>
    <span class="aircraft">{{aircraft}}</span>
    <span class="departure">{{departure_time}} · {{departure_date}}</span>
    <span class="cabin">{{cabin}}</span>
  </div>
  {{#with price}}{{> price_lines}}{{/with}}
  <span class="price-note">per person</span>
  <a class="btn book-btn" href="{{book_href}}">Book Now</a>
</article>"#;

pub const HOTEL_CARD: &str = r#"<article class="result-card hotel-card" data-id="{{id}}">
  <img src="{{image}}" alt="{{name}}">
  <div class="hotel-info">
    <h3>{{name}}</h3>
    <p class="location"><i class="fas fa-map-marker-alt"></i> {{location}} · {{distance}}</p>
    <p class="rating"><span class="stars">{{stars}}</span> {{rating}}</p>
    <p class="description">{{description}}</p>
    <ul class="amenities">
      {{#each amenities}}<li><i class="fas fa-{{icon}}"></i> {{name}}</li>{{/each}}
    </ul>
  </div>
  {{#with price}}{{> price_lines}}{{/with}}
  <span class="price-note">per night</span>
  <a class="btn book-btn" href="{{book_href}}">Book Now</a>
</article>"#;

pub const ACTIVITY_CARD: &str = r#"<article class="result-card activity-card" data-id="{{id}}">
  <img src="{{image}}" alt="{{name}}">
  <span class="category">{{category}}</span>
  <h3>{{name}}</h3>
  <p class="description">{{description}}</p>
  <p class="meta"><i class="fas fa-clock"></i> {{duration}} · <i class="fas fa-star"></i> {{rating}} · {{location}}</p>
  {{#with price}}{{> price_lines}}{{/with}}
  <a class="btn book-btn" href="{{book_href}}">Book Now</a>
</article>"#;

pub const PACKAGE_CARD: &str = r#"<article class="result-card package-card" data-id="{{id}}">
  <img src="{{image}}" alt="{{name}}">
  <h3>{{name}}</h3>
  <p class="route">{{from}} → {{to}} · {{duration}}</p>
  <p class="description">{{description}}</p>
  <ul class="inclusions">
    {{#each inclusions}}<li><i class="fas fa-check"></i> {{this}}</li>{{/each}}
  </ul>
  {{#with price}}{{> price_lines}}{{/with}}
  <a class="btn book-btn" href="{{book_href}}">Book Now</a>
</article>"#;

pub const AGENT_CARD: &str = r#"<article class="result-card agent-card" data-id="{{id}}">
  <img class="avatar" src="{{avatar}}" alt="{{name}}">
  <h3>{{name}}</h3>
  <p class="specialty">{{specialty}}</p>
  <p class="description">{{description}}</p>
  <p class="stats"><i class="fas fa-star"></i> {{rating}} · {{clients}} · {{experience}}</p>
  <a class="btn book-btn" href="{{book_href}}">Contact</a>
  <button type="button" class="btn btn-secondary" data-agent="{{id}}">View Profile</button>
</article>"#;

pub const RESULTS: &str = r#"<section class="search-results" data-kind="{{kind}}">
  {{#if notice}}{{{notice}}}{{/if}}
  {{#if empty}}
  <div class="empty-state">
    <h3>No {{kind}} found</h3>
    <p>Try adjusting your search criteria.</p>
  </div>
  {{else}}
  <h2>{{title}}</h2>
  <div class="results-grid">
    {{#each flights}}{{> flight_card}}{{/each}}
    {{#each hotels}}{{> hotel_card}}{{/each}}
    {{#each activities}}{{> activity_card}}{{/each}}
    {{#each packages}}{{> package_card}}{{/each}}
    {{#each agents}}{{> agent_card}}{{/each}}
  </div>
  {{/if}}
</section>"#;

pub const GRID: &str = r#"<section class="drill-down" data-level="{{level}}">
  {{#if notice}}{{{notice}}}{{/if}}
  {{#if trail}}<nav class="breadcrumb">{{#each trail}}<span>{{this}}</span>{{/each}}
    <form method="post" action="/planner/reset"><button type="submit">Start over</button></form>
  </nav>{{/if}}
  <h2>{{heading}}</h2>
  <div class="grid">
    {{#each cards}}
    <div class="grid-card">
      <form method="post" action="{{select_path}}">
        <button type="submit" class="grid-card-select">
          <h3>{{title}}</h3>
          <span class="count">{{count}}</span>
          <p>{{description}}</p>
        </button>
      </form>
      {{#if destination_id}}
      <div class="grid-card-actions">
        <form method="post" action="/planner/itinerary/{{destination_id}}"><button type="submit">Itinerary</button></form>
        <form method="post" action="/planner/image/{{destination_id}}"><button type="submit">Image</button></form>
      </div>
      {{/if}}
    </div>
    {{else}}
    <p class="empty-state">Nothing to show here yet.</p>
    {{/each}}
  </div>
</section>"#;

pub const DESTINATION_CARD: &str = r#"<article class="destination-card" data-id="{{id}}">
  {{#if image_url}}<img src="{{image_url}}" alt="{{name}}">{{/if}}
  <h3>{{name}}</h3>
  <p class="country">{{country}}</p>
  <p class="rating">{{#each stars}}<i class="{{this}}"></i>{{/each}} {{rating}}</p>
  <p class="description">{{description}}</p>
  {{#if highlights}}<p class="highlights">{{highlights}}</p>{{/if}}
  {{#if best_time}}<p class="best-time">Best time: {{best_time}}</p>{{/if}}
  <span class="price-level">{{price}}</span>
</article>"#;

pub const RECOMMENDATIONS: &str = r#"<section class="recommendations">
  {{#if notice}}{{{notice}}}{{/if}}
  <div class="destinations-grid">
    {{#each destinations}}
    <div class="recommendation">
      {{> destination_card}}
      <form method="post" action="{{../select_action}}">
        <input type="hidden" name="destination" value="{{id}}">
        <button type="submit">Select</button>
      </form>
    </div>
    {{/each}}
  </div>
  {{#if itinerary}}
  <div class="itinerary-preview">
    {{#each itinerary}}<div class="day"><h4>{{heading}}</h4><ul>{{#each activities}}<li>{{this}}</li>{{/each}}</ul></div>{{/each}}
  </div>
  {{/if}}
</section>"#;

pub const ITINERARY: &str = r#"<div class="itinerary-modal">
  <h2>{{title}}</h2>
  {{#each days}}
  <div class="day">
    <h4>{{heading}}</h4>
    <ul>{{#each activities}}<li>{{this}}</li>{{/each}}</ul>
  </div>
  {{/each}}
</div>"#;

pub const DETAILED_ITINERARY: &str = r#"<section class="detailed-itinerary">
  <header>
    <h2>{{title}}</h2>
    <p>{{destination}} · {{duration}} · {{travelers}} travelers · Best time: {{best_time}}</p>
    <p class="summary">{{summary}}</p>
  </header>
  <div class="daily-plan">
    {{#each days}}
    <div class="day">
      <h3>{{heading}}</h3>
      {{#if morning}}<h4>Morning</h4><ul>{{#each morning}}<li>{{this}}</li>{{/each}}</ul>{{/if}}
      {{#if afternoon}}<h4>Afternoon</h4><ul>{{#each afternoon}}<li>{{this}}</li>{{/each}}</ul>{{/if}}
      {{#if evening}}<h4>Evening</h4><ul>{{#each evening}}<li>{{this}}</li>{{/each}}</ul>{{/if}}
      <p>🏨 {{accommodation}} · 🍽️ {{meals}} · 🚗 {{transportation}}</p>
    </div>
    {{else}}<p>Daily itinerary not available</p>{{/each}}
  </div>
  <div class="budget">
    {{#each budget}}<div class="budget-row"><span>{{label}}</span><span>{{amount}}</span></div>
    {{else}}<p>Budget information not available</p>{{/each}}
  </div>
  <div class="tips">
    {{#each tips}}<div class="tip-category"><h4>{{category}}</h4><ul>{{#each tips}}<li>{{this}}</li>{{/each}}</ul></div>
    {{else}}<p>Travel tips not available</p>{{/each}}
  </div>
  <div class="accommodations">
    {{#each stays}}
    <div class="stay">
      <h4>{{name}}</h4>
      <p>{{kind}} · {{location}} · {{price}} · {{rating}}</p>
      {{#if amenities}}<p>{{#each amenities}}<span class="tag">{{this}}</span>{{/each}}</p>{{/if}}
      {{#if pros}}<ul class="pros">{{#each pros}}<li>{{this}}</li>{{/each}}</ul>{{/if}}
      {{#if cons}}<ul class="cons">{{#each cons}}<li>{{this}}</li>{{/each}}</ul>{{/if}}
    </div>
    {{else}}<p>Accommodation recommendations not available</p>{{/each}}
  </div>
  <div class="restaurants">
    {{#each restaurants}}
    <div class="restaurant">
      <h4>{{name}}</h4>
      <p>{{cuisine}} · {{price_range}} · {{rating}} · {{location}}</p>
      {{#if best_dishes}}<p>Must try: {{best_dishes}}</p>{{/if}}
      {{#if specialty}}<p>{{specialty}}</p>{{/if}}
      <span class="reservation">{{reservation}}</span>
    </div>
    {{else}}<p>Restaurant recommendations not available</p>{{/each}}
  </div>
</section>"#;

pub const STEP: &str = r#"<section class="planner-step" data-step="{{step}}">
  {{#if notice}}{{{notice}}}{{/if}}
  <div class="progress"><div class="progress-bar" style="width: {{progress}}%"></div></div>
  <p>Step {{step}} of 3</p>
  {{#if selected}}<p class="selected-destination">Selected: {{selected.name}}</p>{{/if}}
  {{#if booking}}
  <div class="booking-defaults">
    <p>Hotel destination: {{booking.destination}}</p>
    <p>Flight to: {{booking.destination}}</p>
    {{#if booking.passengers}}<p>Passengers: {{booking.passengers}}</p>{{/if}}
  </div>
  {{/if}}
</section>"#;

pub const BOOKING_FORM: &str = r#"<div class="booking-modal">
  {{#if notice}}{{{notice}}}{{/if}}
  <h2>{{heading}}</h2>
  {{#with price}}{{> price_lines}}{{/with}}
  <form method="post" action="{{action}}">
    <input type="text" name="customer_name" placeholder="Full name" value="{{fields.customer_name}}" required>
    <input type="email" name="customer_email" placeholder="Email" value="{{fields.customer_email}}" required>
    <input type="tel" name="customer_phone" placeholder="Phone" value="{{fields.customer_phone}}">
    <input type="date" name="travel_date" value="{{fields.travel_date}}" required>
    <input type="date" name="return_date" value="{{fields.return_date}}">
    <input type="number" name="passengers" min="1" max="10" value="{{fields.passengers}}">
    <textarea name="special_requests">{{fields.special_requests}}</textarea>
    {{#if destination}}<input type="hidden" name="destination" value="{{destination}}">{{/if}}
    <button type="submit">Confirm Booking</button>
  </form>
</div>"#;

pub const TRIP_SEARCH: &str = r#"<section class="trip-search">
  {{#if notice}}{{{notice}}}{{/if}}
  <h3>Book your trip to {{destination}}</h3>
  <form method="post" action="/search/hotels">
    <input type="hidden" name="destination" value="{{destination}}">
    <input type="date" name="check_in" required>
    <input type="date" name="check_out" required>
    <input type="number" name="passengers" min="1" max="10" value="{{passengers}}">
    <button type="submit">Search Hotels</button>
  </form>
  <form method="post" action="/search/flights">
    <input type="text" name="from" placeholder="From">
    <input type="hidden" name="to" value="{{destination}}">
    <input type="date" name="depart_date">
    <input type="number" name="passengers" min="1" max="10" value="{{passengers}}">
    <button type="submit">Search Flights</button>
  </form>
</section>"#;

pub const BOOKING_CONFIRMATION: &str = r#"<div class="booking-success">
  <h2>{{message}}</h2>
  <p>Booking ID: <strong>{{booking_id}}</strong></p>
  <p>A confirmation has been sent to {{email}}.</p>
  {{#if next_steps}}<h4>Next steps</h4><ol>{{#each next_steps}}<li>{{this}}</li>{{/each}}</ol>{{/if}}
</div>"#;

pub const DESTINATIONS: &str = r#"<section class="destinations">
  {{#if offline}}<p class="offline">Showing sample destinations while the travel service is offline.</p>{{/if}}
  <p class="summary">{{summary}}</p>
  <div class="destinations-grid">
    {{#each destinations}}{{> destination_card}}{{/each}}
  </div>
</section>"#;

pub const CONTINENT_OPTIONS: &str = r#"<option value="all">All Continents</option>
{{#each continents}}<option value="{{name}}"{{#if (eq name ../selected)}} selected{{/if}}>{{name}} ({{count}})</option>
{{/each}}"#;

pub const UPLOAD_RESULT: &str = r#"<div class="upload-result">
  {{#if notice}}{{{notice}}}{{/if}}
  <img src="{{photo_url}}" alt="{{file_name}}">
  <p>{{file_name}}</p>
  {{#if demo}}<p class="demo">Demo mode</p>{{/if}}
</div>"#;

pub const RECENT_UPLOAD: &str = r#"<div class="recent-upload">
  <p>Use your recent photo from {{uploaded_at}}?</p>
  <img src="{{photo_url}}" alt="{{file_name}}">
</div>"#;

pub const GALLERY: &str = r#"<section class="gallery">
  {{#if notice}}{{{notice}}}{{/if}}
  <h3>{{title}}</h3>
  <div class="gallery-grid">
    {{#each images}}<figure><img src="{{url}}" alt="{{caption}}"><figcaption>{{caption}}</figcaption></figure>{{/each}}
  </div>
</section>"#;
