use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

use super::canvas::CanvasSurface;
use super::config::GraphConfig;
use super::controller::{FrameScheduler, GraphController, Surface};
use super::scale::SurfaceScale;
use super::state::PointerSample;
use super::types::Contact;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driving a single shared callback.
struct AnimationFrames {
	callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
	type Handle = i32;

	fn request(&mut self) -> Option<i32> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		window
			.request_animation_frame(callback.as_ref()?.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel(&mut self, handle: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}

/// Pointer offset inside the displayed canvas box plus the backing ratio.
fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64, SurfaceScale) {
	let rect = canvas.get_bounding_client_rect();
	let scale = SurfaceScale::new(
		canvas.width() as f64,
		canvas.height() as f64,
		rect.width(),
		rect.height(),
	);
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
		scale,
	)
}

/// Animated person/tag graph of a contact network.
///
/// Mounting activates the render loop and unmounting cancels it. Clicking a
/// person node reports its contact id through `on_select`.
#[component]
pub fn ContactGraphCanvas(
	#[prop(into)] contacts: Signal<Vec<Contact>>,
	#[prop(into)] on_select: Callback<String>,
	#[prop(into, default = Signal::stored(String::new()))] filter: Signal<String>,
	#[prop(optional)] config: Option<GraphConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (width, height) = (config.width, config.height);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
	let surface: Rc<RefCell<Option<CanvasSurface>>> = Rc::new(RefCell::new(None));
	let controller = Rc::new(RefCell::new(GraphController::new(
		AnimationFrames {
			callback: frame_cb.clone(),
		},
		config,
	)));

	let (controller_init, frame_cb_init, surface_init) =
		(controller.clone(), frame_cb.clone(), surface.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		match CanvasSurface::from_canvas(&canvas) {
			Ok(s) => *surface_init.borrow_mut() = Some(s),
			Err(err) => warn!("graph surface unavailable, drawing disabled: {err}"),
		}

		let (controller_anim, surface_anim) = (controller_init.clone(), surface_init.clone());
		*frame_cb_init.borrow_mut() = Some(Closure::new(move || {
			let mut surface = surface_anim.borrow_mut();
			controller_anim
				.borrow_mut()
				.frame(surface.as_mut().map(|s| s as &mut dyn Surface));
		}));

		let mut c = controller_init.borrow_mut();
		c.activate(&contacts.get_untracked());
		c.set_filter(&filter.get_untracked());
	});

	let controller_data = controller.clone();
	Effect::new(move |prev: Option<()>| {
		let list = contacts.get();
		if prev.is_some() {
			debug!("contacts changed, rebuilding graph");
			controller_data.borrow_mut().set_contacts(&list);
		}
	});

	let controller_filter = controller.clone();
	Effect::new(move |_| {
		let f = filter.get();
		controller_filter.borrow_mut().set_filter(&f);
	});

	let teardown = SendWrapper::new((controller.clone(), frame_cb));
	on_cleanup(move || {
		let (controller, frame_cb) = teardown.take();
		controller.borrow_mut().deactivate();
		// Drop the frame closure so it no longer keeps the controller alive.
		frame_cb.borrow_mut().take();
	});

	let controller_mm = controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y, scale) = pointer_position(&canvas, &ev);
		let mut c = controller_mm.borrow_mut();
		c.set_surface_scale(scale);
		c.pointer_move(PointerSample {
			x,
			y,
			movement_x: ev.movement_x() as f64,
			movement_y: ev.movement_y() as f64,
			primary_down: ev.buttons() & 1 != 0,
		});
	};

	let controller_ml = controller.clone();
	let on_mouseleave = move |_: MouseEvent| {
		controller_ml.borrow_mut().pointer_leave();
	};

	let controller_click = controller.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y, scale) = pointer_position(&canvas, &ev);
		let selected = {
			let mut c = controller_click.borrow_mut();
			c.set_surface_scale(scale);
			c.click(x, y)
		};
		if let Some(id) = selected {
			debug!("contact {id} selected from graph");
			on_select.run(id);
		}
	};

	let controller_wh = controller;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		controller_wh.borrow_mut().wheel(ev.delta_y());
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="contact-graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			on:wheel=on_wheel
			style="display: block; width: 100%; cursor: grab;"
		/>
	}
}
