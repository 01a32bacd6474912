//! # 引导页场景测试
//!
//! 测试 宿主事件 → Onboarding → 视图 / 宿主能力 的完整链路。
//! 列表和状态栏都用记录器代替，不依赖任何 UI。

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use onboarding_core::{
    BarStyle, Color, EasingFunction, Intent, Onboarding, OnboardingError, OnboardingOptions, Page,
    PagingList, StatusBarController, TransitionPhase, ViewToken,
};

/// 列表和状态栏共用的调用顺序
#[derive(Debug, Clone, Copy, PartialEq)]
enum HostCall {
    Scroll(usize),
    Style(BarStyle, bool),
}

type CallLog = Rc<RefCell<Vec<HostCall>>>;

/// 记录所有滚动指令
#[derive(Default)]
struct ListRecorder {
    scrolls: Vec<(usize, bool)>,
    calls: CallLog,
}

impl PagingList for ListRecorder {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        self.scrolls.push((index, animated));
        self.calls.borrow_mut().push(HostCall::Scroll(index));
    }
}

/// 记录所有状态栏样式
#[derive(Default)]
struct BarRecorder {
    styles: Vec<(BarStyle, bool)>,
    calls: CallLog,
}

impl StatusBarController for BarRecorder {
    fn set_style(&mut self, style: BarStyle, animated: bool) {
        self.styles.push((style, animated));
        self.calls.borrow_mut().push(HostCall::Style(style, animated));
    }
}

struct Harness {
    onboarding: Onboarding,
    list: Rc<RefCell<ListRecorder>>,
    bar: Rc<RefCell<BarRecorder>>,
    calls: CallLog,
    page_changes: Rc<RefCell<Vec<usize>>>,
    finished: Rc<RefCell<Vec<&'static str>>>,
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// 红、蓝、绿三页，线性缓动，500ms
fn rgb_options() -> OnboardingOptions {
    OnboardingOptions::new(vec![
        Page::new(Color::rgb(255, 0, 0), "red.png", "Red", "first"),
        Page::new(Color::rgb(0, 0, 255), "blue.png", "Blue", "second"),
        Page::new(Color::rgb(0, 255, 0), "green.png", "Green", "third"),
    ])
    .with_transition_duration(500)
    .with_easing(EasingFunction::Linear)
}

fn mount(options: OnboardingOptions) -> Harness {
    let calls = CallLog::default();
    let list = Rc::new(RefCell::new(ListRecorder {
        calls: calls.clone(),
        ..Default::default()
    }));
    let bar = Rc::new(RefCell::new(BarRecorder {
        calls: calls.clone(),
        ..Default::default()
    }));
    let page_changes = Rc::new(RefCell::new(Vec::new()));
    let finished = Rc::new(RefCell::new(Vec::new()));

    let changes = page_changes.clone();
    let skipped = finished.clone();
    let done = finished.clone();
    let onboarding = Onboarding::builder(options)
        .page_index_callback(move |index| changes.borrow_mut().push(index))
        .on_skip(move || skipped.borrow_mut().push("skip"))
        .on_done(move || done.borrow_mut().push("done"))
        .build(list.clone(), bar.clone())
        .unwrap();

    Harness {
        onboarding,
        list,
        bar,
        calls,
        page_changes,
        finished,
    }
}

/// 首次翻页：颜色从上一页过渡到当前页
#[test]
fn test_first_page_change_cross_fades() {
    let mut h = mount(rgb_options());
    assert_eq!(h.onboarding.background_color(), Color::rgb(255, 0, 0));

    assert!(h.onboarding.on_viewable_items_changed(&[ViewToken::viewable(1)]));
    let state = *h.onboarding.state();
    assert_eq!(state.current_page_index, 1);
    assert_eq!(state.previous_page_index, Some(0));
    assert_eq!(state.transition_progress, 0.0);
    assert_eq!(*h.page_changes.borrow(), vec![1]);

    // t = 0
    assert_eq!(h.onboarding.background_color(), Color::rgb(255, 0, 0));

    // t = duration / 2
    assert_eq!(h.onboarding.update(ms(250)), TransitionPhase::Transitioning);
    assert_eq!(h.onboarding.background_color(), Color::rgb(128, 0, 128));

    // t = duration
    assert_eq!(h.onboarding.update(ms(250)), TransitionPhase::Idle);
    assert_eq!(h.onboarding.background_color(), Color::rgb(0, 0, 255));
    assert_eq!(h.onboarding.state().transition_progress, 1.0);
}

/// skipToPage：只向列表发指令，状态等到可见性事件才变化
#[test]
fn test_skip_to_page_scrolls_list() {
    let mut h = mount(rgb_options().with_skip_to_page(2));

    h.onboarding.press(Intent::Skip).unwrap();
    assert_eq!(h.list.borrow().scrolls, vec![(2, true)]);
    assert_eq!(h.onboarding.state().current_page_index, 0);
    assert!(h.finished.borrow().is_empty());
    assert!(h.page_changes.borrow().is_empty());

    h.onboarding.on_viewable_items_changed(&[ViewToken::viewable(2)]);
    assert_eq!(h.onboarding.state().current_page_index, 2);
    assert_eq!(h.onboarding.state().previous_page_index, Some(0));
    assert_eq!(*h.page_changes.borrow(), vec![2]);
}

/// skipToPage 也会先还原状态栏，再滚动列表
#[test]
fn test_skip_to_page_resets_status_bar_before_scroll() {
    let mut h = mount(rgb_options().with_skip_to_page(2));
    h.calls.borrow_mut().clear();

    h.onboarding.press(Intent::Skip).unwrap();
    assert_eq!(
        *h.calls.borrow(),
        vec![
            HostCall::Style(BarStyle::Default, true),
            HostCall::Scroll(2)
        ]
    );
}

/// 不接管状态栏时，skipToPage 只滚动列表
#[test]
fn test_skip_to_page_leaves_bar_alone_when_not_controlled() {
    let mut options = rgb_options().with_skip_to_page(2);
    options.control_status_bar = false;
    let mut h = mount(options);
    h.onboarding.press(Intent::Skip).unwrap();
    assert!(h.bar.borrow().styles.is_empty());
    assert_eq!(*h.calls.borrow(), vec![HostCall::Scroll(2)]);
}

/// 过渡未完成时再次翻页：从新端点重新开始
#[test]
fn test_rapid_page_changes_restart_transition() {
    let mut h = mount(rgb_options());

    h.onboarding.on_visible_page_changed(Some(1));
    h.onboarding.update(ms(100));
    assert_eq!(h.onboarding.phase(), TransitionPhase::Transitioning);

    h.onboarding.on_visible_page_changed(Some(2));
    let state = *h.onboarding.state();
    assert_eq!(state.previous_page_index, Some(1));
    assert_eq!(state.transition_progress, 0.0);

    // 新过渡只混合蓝和绿
    assert_eq!(h.onboarding.background_color(), Color::rgb(0, 0, 255));
    let mut last = h.onboarding.background_color();
    for _ in 0..10 {
        h.onboarding.update(ms(50));
        let color = h.onboarding.background_color();
        assert_eq!(color.r, 0);
        assert!(color.g >= last.g);
        assert!(color.b <= last.b);
        last = color;
    }
    assert_eq!(last, Color::rgb(0, 255, 0));
    assert_eq!(*h.page_changes.borrow(), vec![1, 2]);
}

/// 同一页重复上报：无回调、无动画
#[test]
fn test_same_index_is_ignored() {
    let mut h = mount(rgb_options());
    h.onboarding.on_visible_page_changed(Some(1));
    h.onboarding.update(ms(500));

    assert!(!h.onboarding.on_viewable_items_changed(&[ViewToken::viewable(1)]));
    assert!(!h.onboarding.on_visible_page_changed(None));
    assert_eq!(*h.page_changes.borrow(), vec![1]);
    assert_eq!(h.onboarding.state().transition_progress, 1.0);
}

/// 混合上报序列：页码只跟随最后一次被接受的上报
#[test]
fn test_index_follows_last_accepted_report() {
    let mut h = mount(rgb_options());
    for index in [Some(1), None, Some(1), Some(7), Some(2), Some(0), None] {
        h.onboarding.on_visible_page_changed(index);
        h.onboarding.update(ms(100));
    }

    let state = *h.onboarding.state();
    assert_eq!(state.current_page_index, 0);
    assert_eq!(state.previous_page_index, Some(2));
    assert_eq!(*h.page_changes.borrow(), vec![1, 2, 0]);
    assert_eq!(h.onboarding.phase(), TransitionPhase::Transitioning);
}

/// 越界的可见页不改变状态
#[test]
fn test_out_of_range_visible_page_is_ignored() {
    let mut h = mount(rgb_options());
    assert!(!h.onboarding.on_visible_page_changed(Some(3)));
    assert_eq!(h.onboarding.state().current_page_index, 0);
    assert!(h.page_changes.borrow().is_empty());
}

/// 连续翻到最后一页
#[test]
fn test_reaches_last_page() {
    let mut h = mount(rgb_options());
    for index in 1..3 {
        h.onboarding.on_visible_page_changed(Some(index));
        h.onboarding.update(ms(500));
    }

    assert_eq!(h.onboarding.state().current_page_index, 2);
    let visibility = h.onboarding.control_visibility();
    assert!(visibility.is_last_page);
    assert!(visibility.done);
    assert!(!visibility.next);
    assert!(visibility.skip);
}

/// Next 按钮只在非最后一页出现，Done 只在最后一页出现
#[test]
fn test_button_visibility_follows_page() {
    let mut h = mount(rgb_options());
    let view = h.onboarding.pagination_view();
    assert!(view.button(Intent::Next).is_some());
    assert!(view.button(Intent::Done).is_none());

    h.onboarding.on_visible_page_changed(Some(2));
    let view = h.onboarding.pagination_view();
    assert!(view.button(Intent::Next).is_none());
    assert!(view.button(Intent::Done).is_some());
    assert!(view.dots[2].selected);
}

/// Next 请求滚动到下一页
#[test]
fn test_next_scrolls_to_following_page() {
    let mut h = mount(rgb_options());
    h.onboarding.press(Intent::Next).unwrap();
    assert_eq!(h.list.borrow().scrolls, vec![(1, true)]);

    h.onboarding.on_visible_page_changed(Some(2));
    let err = h.onboarding.press(Intent::Next).unwrap_err();
    assert!(matches!(
        err,
        OnboardingError::PageOutOfRange {
            index: 3,
            num_pages: 3
        }
    ));
    assert_eq!(h.list.borrow().scrolls.len(), 1);
}

/// 完成时先还原状态栏，再调用回调
#[test]
fn test_done_resets_status_bar() {
    let mut h = mount(rgb_options());
    h.onboarding.on_visible_page_changed(Some(2));
    h.onboarding.press(Intent::Done).unwrap();

    assert_eq!(*h.finished.borrow(), vec!["done"]);
    assert_eq!(
        h.bar.borrow().styles.last(),
        Some(&(BarStyle::Default, true))
    );
}

/// 没有 skipToPage 时跳过调用 on_skip
#[test]
fn test_skip_without_target_calls_callback() {
    let mut h = mount(rgb_options());
    h.onboarding.press(Intent::Skip).unwrap();
    assert_eq!(*h.finished.borrow(), vec!["skip"]);
    assert!(h.list.borrow().scrolls.is_empty());
}

/// 状态栏样式跟随当前页明暗
#[test]
fn test_status_bar_tracks_page_brightness() {
    let options = OnboardingOptions::new(vec![
        Page::new(Color::WHITE, "a.png", "A", "a"),
        Page::new(Color::rgb(0x20, 0x20, 0x20), "b.png", "B", "b"),
    ]);
    let mut h = mount(options);
    h.onboarding.on_visible_page_changed(Some(1));
    h.onboarding.on_visible_page_changed(Some(0));

    assert_eq!(
        h.bar.borrow().styles,
        vec![
            (BarStyle::DarkContent, false),
            (BarStyle::LightContent, false),
            (BarStyle::DarkContent, false),
        ]
    );
}

/// 零时长：下一次 update 立即落定
#[test]
fn test_zero_duration_settles_on_next_update() {
    let mut h = mount(rgb_options().with_transition_duration(0));
    h.onboarding.on_visible_page_changed(Some(1));
    assert_eq!(h.onboarding.update(Duration::ZERO), TransitionPhase::Idle);
    assert_eq!(h.onboarding.background_color(), Color::rgb(0, 0, 255));
}

#[test]
fn test_frame_summary_mid_transition() {
    let mut h = mount(rgb_options());
    h.onboarding.on_visible_page_changed(Some(1));
    h.onboarding.update(ms(250));

    insta::assert_snapshot!(
        h.onboarding.frame().summary(),
        @"page=1 prev=0 progress=0.50 bg=#800080 buttons=[next,skip]"
    );
}
