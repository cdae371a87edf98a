use leptos::prelude::*;

use crate::components::contact_graph::{Contact, ContactGraphCanvas};

/// A small hand-written network so the graph has something to settle.
fn sample_contacts() -> Vec<Contact> {
	vec![
		Contact::new("1", "Ada", &["seed", "rust", "berlin"]),
		Contact::new("2", "Bo", &["seed", "alpha"]),
		Contact::new("3", "Chidi", &["rust", "compilers"]),
		Contact::new("4", "Dana", &["berlin", "design"]),
		Contact::new("5", "Eun-ji", &["alpha", "design", "climbing"]),
		Contact::new("6", "Farid", &["compilers", "wasm"]),
		Contact::new("7", "Grete", &["wasm", "rust", "berlin"]),
		Contact::new("8", "Hiro", &["climbing"]),
		Contact::new("9", "Ines", &[]),
		Contact::new("10", "Jun", &["seed", "fundraising"]),
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let contacts = RwSignal::new(sample_contacts());
	let graph_view = RwSignal::new(true);
	let search = RwSignal::new(String::new());
	let selected = RwSignal::new(None::<String>);

	let on_select = Callback::new(move |id: String| selected.set(Some(id)));
	let selected_contact = move || {
		let id = selected.get()?;
		contacts.with(|cs| cs.iter().find(|c| c.id == id).cloned())
	};
	let add_contact = move |_| {
		contacts.update(|cs| {
			let n = cs.len() + 1;
			cs.push(Contact::new(n.to_string(), format!("Guest {n}"), &["seed", "meetup"]));
		});
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="network">
				<header class="network-toolbar">
					<h1>"Network"</h1>
					<input
						type="text"
						placeholder="Search graph..."
						prop:value=move || search.get()
						on:input=move |ev| search.set(event_target_value(&ev))
					/>
					<button on:click=move |_| graph_view.set(false)>"List"</button>
					<button on:click=move |_| graph_view.set(true)>"Synapse"</button>
					<button on:click=add_contact>"Add Person"</button>
				</header>

				<Show
					when=move || graph_view.get()
					fallback=move || {
						view! {
							<ul class="contact-list">
								<For
									each=move || contacts.get()
									key=|c| c.id.clone()
									children=move |c: Contact| {
										let id = c.id.clone();
										view! {
											<li on:click=move |_| selected.set(Some(id.clone()))>
												<strong>{c.name}</strong>
												" "
												{c.tags.iter().map(|t| format!("#{t} ")).collect::<String>()}
											</li>
										}
									}
								/>
							</ul>
						}
					}
				>
					<div class="graph-frame">
						<ContactGraphCanvas contacts=contacts on_select=on_select filter=search />
					</div>
					<p class="subtitle">"Hover to trace connections. Scroll to zoom. Drag empty space to pan."</p>
				</Show>

				{move || {
					selected_contact()
						.map(|c| {
							view! {
								<aside class="contact-detail">
									<h2>{c.name}</h2>
									<p>{c.tags.iter().map(|t| format!("#{t} ")).collect::<String>()}</p>
									<button on:click=move |_| selected.set(None)>"Close"</button>
								</aside>
							}
						})
				}}
			</div>
		</ErrorBoundary>
	}
}
